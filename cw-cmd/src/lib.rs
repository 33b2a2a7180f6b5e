//! Command implementations for the CoastalWatch CLI.
//!
//! Each subcommand works against the embedded fixtures loaded into an
//! in-memory store: export the map as SVG, run the live simulation
//! headless, or dump reports.

use clap::Subcommand;

pub mod render;
pub mod reports;
pub mod simulate;

#[derive(Subcommand)]
pub enum Command {
    /// Render the India map with the fixture reports to an SVG file
    RenderMap {
        /// Output path for the SVG
        #[arg(short, long)]
        out: String,

        /// Heatmap opacity between 0 and 1
        #[arg(long, default_value_t = 0.7)]
        heatmap_opacity: f64,

        /// Zoom onto this report's marker, as a click on the map would
        #[arg(long)]
        focus: Option<String>,
    },

    /// Run the live-activity simulation and print what happens
    Simulate {
        /// Simulated seconds to run
        #[arg(short, long, default_value_t = 60)]
        seconds: u64,

        /// Seed for the network flips and mock feeds
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Sleep one real second per simulated second
        #[arg(long)]
        realtime: bool,
    },

    /// List the fixture reports as CSV (or JSON)
    Reports {
        /// Only reports with this status (unverified, under-review, verified, dismissed)
        #[arg(long)]
        status: Option<String>,

        /// Print JSON instead of CSV
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::RenderMap {
            out,
            heatmap_opacity,
            focus,
        } => render::run_render_map(&out, heatmap_opacity, focus.as_deref()),
        Command::Simulate {
            seconds,
            seed,
            realtime,
        } => simulate::run_simulate(seconds, seed, realtime).await,
        Command::Reports { status, json } => reports::run_reports(status.as_deref(), json),
    }
}
