//! In-memory SQLite store for the CoastalWatch dashboard.
//!
//! Loads the embedded fixture CSVs into an in-memory SQLite database and
//! exposes typed query and update methods to the dashboard screens, the
//! simulation and the CLI.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite`
//! - Fixture CSVs embedded with `include_str!` in `cw-core`
//! - Screens read and write through the [`HazardRepository`] trait
//!
//! # Usage
//!
//! ```rust
//! use cw_db::{Database, HazardRepository};
//!
//! let db = Database::with_fixtures().unwrap();
//! let reports = db.reports().unwrap();
//! assert_eq!(reports[0].id, "r_001");
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.

pub mod schema;
mod loader;
mod queries;
pub mod models;
mod repository;

pub use repository::HazardRepository;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding reports, posts, users and analytics.
///
/// Cheaply cloneable (via `Rc`); clones share one connection.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create an empty in-memory database with the full schema applied.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }

    /// Create a database seeded with every embedded fixture.
    pub fn with_fixtures() -> anyhow::Result<Self> {
        use cw_core::{alert, analytics, audit, report, social, user};

        let db = Self::new()?;
        db.load_reports(report::CSV_OBJECT)?;
        db.load_social_posts(social::CSV_OBJECT)?;
        db.load_alerts(alert::CSV_OBJECT)?;
        db.load_system_users(user::CSV_OBJECT)?;
        db.load_audit_logs(audit::CSV_OBJECT)?;
        db.load_analytics(
            analytics::HAZARD_TRENDS_CSV,
            analytics::REGION_STATS_CSV,
            analytics::SOURCE_SHARES_CSV,
            analytics::VERIFICATION_TRENDS_CSV,
        )?;
        log::info!("[CW] db: fixtures loaded");
        Ok(db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_reports(cw_core::report::CSV_OBJECT).unwrap();
        let reports = db2.query_reports().unwrap();
        assert_eq!(reports.len(), 8, "Clone should see same data via shared Rc");
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        assert!(db.query_reports().unwrap().is_empty());
        assert!(db.query_social_posts().unwrap().is_empty());
    }
}
