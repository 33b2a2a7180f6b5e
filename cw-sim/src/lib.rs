//! Simulated live activity for the CoastalWatch demo.
//!
//! Everything time-based runs off one virtual clock ([`Scheduler`]); nothing
//! in this crate sleeps or reads the system time. The browser app advances
//! it from a polling loop, the CLI from a plain loop, and tests by calling
//! [`Simulation::advance_to`] directly.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use cw_sim::{FixedNetwork, MockFeed, SimConfig, SimEvent, Simulation};
//!
//! let epoch = Utc.with_ymd_and_hms(2025, 9, 8, 12, 0, 0).unwrap();
//! let mut sim = Simulation::new(SimConfig::default(), FixedNetwork::online(), MockFeed::seeded(1), Vec::new(), epoch);
//! let item = sim.submit_report(cw_core::hazard::HazardType::Flooding);
//! assert_eq!(sim.advance_to(3_000), vec![SimEvent::UploadSynced(item.id)]);
//! ```

pub mod alerts;
pub mod config;
pub mod engine;
pub mod feed;
pub mod live;
pub mod network;
pub mod scheduler;
pub mod uploads;

pub use alerts::AlertQueue;
pub use config::SimConfig;
pub use engine::{SimEvent, SimTimer, Simulation};
pub use feed::MockFeed;
pub use live::{apply_events, Applied};
pub use network::{FixedNetwork, NetworkStatus, ScriptedNetwork, SimulatedNetwork};
pub use scheduler::{Fired, Scheduler, TimerId};
pub use uploads::UploadQueue;
