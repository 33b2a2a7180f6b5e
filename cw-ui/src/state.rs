//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//!
//! The database lives behind an `Rc`, so writes to it are invisible to the
//! signal graph. Anything that writes calls [`AppState::touch`]; anything
//! that reads subscribes by reading `data_version`.

use crate::js_bridge;
use cw_core::navigation::Navigator;
use cw_db::Database;
use cw_sim::{apply_events, SimulatedNetwork, Simulation};
use dioxus::prelude::*;
use std::fmt::Display;

/// The simulation the browser app runs.
pub type LiveSimulation = Simulation<SimulatedNetwork>;

#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Current screen, signed-in user and selection
    pub navigator: Signal<Navigator>,
    /// Latest answer from the network-status observer
    pub offline: Signal<bool>,
    /// Bumped after every database write
    pub data_version: Signal<u64>,
    /// Live activity (None until the database is ready)
    pub sim: Signal<Option<LiveSimulation>>,
    /// Milliseconds since page load at which the simulation started
    pub sim_started_ms: Signal<u64>,
    /// Emergency alert overlay toggle (analysts and officials only)
    pub emergency_popups: Signal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            navigator: Signal::new(Navigator::new()),
            offline: Signal::new(false),
            data_version: Signal::new(0),
            sim: Signal::new(None),
            sim_started_ms: Signal::new(0),
            emergency_popups: Signal::new(true),
        }
    }

    /// Tell readers the database changed.
    pub fn touch(mut self) {
        let next = *self.data_version.peek() + 1;
        self.data_version.set(next);
    }

    /// Log and surface an error through the shared `ErrorDisplay`.
    pub fn report_error(mut self, context: &str, err: impl Display) {
        let message = format!("{}: {}", context, err);
        // Repeating the same failure from a render must not loop.
        if self.error_msg.peek().as_deref() == Some(message.as_str()) {
            return;
        }
        log::error!("[CW] {}", message);
        self.error_msg.set(Some(message));
    }

    /// Read from the repository for a render. Failures are surfaced and
    /// the screen gets an empty value.
    pub fn query<T: Default>(&self, context: &str, read: impl FnOnce(&Database) -> anyhow::Result<T>) -> T {
        let Some(db) = self.database() else {
            return T::default();
        };
        match read(&db) {
            Ok(value) => value,
            Err(e) => {
                self.report_error(context, e);
                T::default()
            }
        }
    }

    /// Database handle for screens, subscribing the caller to data changes.
    pub fn database(&self) -> Option<Database> {
        let _ = (self.data_version)();
        self.db.read().clone()
    }

    /// Bring the simulation clock up to the page clock and write whatever
    /// fired. Without `force` nothing is touched until a timer is due.
    pub fn advance_simulation(mut self, force: bool) {
        let elapsed = js_bridge::now_ms().saturating_sub(*self.sim_started_ms.peek());
        let due = self.sim.peek().as_ref().and_then(|sim| sim.next_due_ms());
        if !force && !due.is_some_and(|due| due <= elapsed) {
            return;
        }

        let events = match self.sim.write().as_mut() {
            Some(sim) => sim.advance_to(elapsed),
            None => return,
        };
        let Some(db) = self.db.peek().clone() else {
            return;
        };
        match apply_events(&db, events) {
            Ok(applied) => {
                if let Some(offline) = applied.offline {
                    self.offline.set(offline);
                }
                if applied.data_changed {
                    self.touch();
                }
            }
            Err(e) => self.report_error("Live update failed", e),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
