//! CoastalWatch: real-time coastal hazard reporting and monitoring.
//!
//! Citizens report ocean hazards, officials and analysts monitor and verify
//! them on an interactive map of India's coast.
//!
//! Data flow:
//! 1. The fixture CSVs embedded in `cw-core` are loaded into an in-memory
//!    SQLite database on mount.
//! 2. A polling loop advances the `cw-sim` virtual clock with the browser's
//!    elapsed time; generated reports and posts are written to the store
//!    and the offline flag follows the simulated network.
//! 3. Screens read through `HazardRepository` and subscribe to
//!    `AppState::data_version` so they re-query after every write.

mod screens;

use cw_core::navigation::Screen;
use cw_db::Database;
use cw_sim::{MockFeed, SimConfig, SimulatedNetwork, Simulation};
use cw_ui::components::{ErrorDisplay, LoadingSpinner};
use cw_ui::js_bridge;
use cw_ui::state::AppState;
use dioxus::prelude::*;

/// How often the simulation clock is advanced.
const SIM_POLL_MS: u32 = 250;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("coastal-watch-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Initialize database and simulation on mount
    use_effect(move || match Database::with_fixtures() {
        Ok(db) => {
            let now = js_bridge::wall_clock();
            let seed_alerts = match db.query_seed_alerts(now) {
                Ok(alerts) => alerts,
                Err(e) => {
                    state.report_error("Failed to load emergency alerts", e);
                    Vec::new()
                }
            };
            let seed = js_bridge::now_ms();
            let config = SimConfig::default();
            let network = SimulatedNetwork::seeded(config.offline_probability, seed);
            let sim = Simulation::new(config, network, MockFeed::seeded(seed.rotate_left(17)), seed_alerts, now);
            log::info!("[CW] app: data loaded, simulation seeded with {}", seed);

            state.sim_started_ms.set(seed);
            state.sim.set(Some(sim));
            state.db.set(Some(db));
            state.loading.set(false);
        }
        Err(e) => {
            state.report_error("Database initialization failed", e);
            state.loading.set(false);
        }
    });

    use_future(move || async move {
        loop {
            js_bridge::sleep_ms(SIM_POLL_MS).await;
            state.advance_simulation(false);
        }
    });

    let loading = (state.loading)();
    let error = (state.error_msg)();
    let screen = state.navigator.read().current();

    rsx! {
        div {
            style: "min-height: 100vh; background: #F9FAFB; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; color: #111827;",
            if let Some(message) = error {
                ErrorDisplay { message }
            }
            if loading {
                LoadingSpinner {}
            } else {
                {render_screen(screen)}
            }
        }
    }
}

fn render_screen(screen: Screen) -> Element {
    match screen {
        Screen::Landing => rsx! { screens::Landing {} },
        Screen::Auth => rsx! { screens::Auth {} },
        Screen::CitizenReporting => rsx! { screens::CitizenReporting {} },
        Screen::Dashboard => rsx! { screens::Dashboard {} },
        Screen::ReportDetails => rsx! { screens::ReportDetails {} },
        Screen::SocialFeed => rsx! { screens::SocialFeed {} },
        Screen::Analytics => rsx! { screens::Analytics {} },
        Screen::MyReports => rsx! { screens::MyReports {} },
        Screen::AdminSettings => rsx! { screens::AdminSettings {} },
        Screen::EmergencyReport => rsx! { screens::EmergencyReport {} },
    }
}
