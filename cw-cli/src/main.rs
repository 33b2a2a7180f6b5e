//! CoastalWatch CLI - the dashboard's map, reports and live feed without a browser.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "cw-cli",
    version,
    about = "CoastalWatch coastal hazard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: cw_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("[CW] cli start");
    cw_cmd::run(cli.command).await
}
