//! Core domain types for the CoastalWatch coastal-hazard dashboard.
//!
//! Every screen, the map and the simulation share these types. Fixture data
//! is embedded at compile time from the workspace `fixtures/` directory and
//! parsed with the `parse_*_csv` functions next to each type.

pub mod alert;
pub mod analytics;
pub mod audit;
pub mod error;
pub mod hazard;
pub mod navigation;
mod records;
pub mod report;
pub mod social;
pub mod upload;
pub mod user;

pub use error::CoreError;
