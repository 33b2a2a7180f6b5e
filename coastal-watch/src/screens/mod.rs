//! One component per screen of the navigation shell.

mod admin_settings;
mod analytics;
mod auth;
mod citizen_reporting;
mod dashboard;
mod emergency_report;
mod landing;
mod my_reports;
mod report_details;
mod social_feed;

use cw_core::audit::{AuditKind, AuditLog};
use dioxus::prelude::ReadableExt;
use cw_db::Database;
use cw_ui::js_bridge;

pub use admin_settings::AdminSettings;
pub use analytics::Analytics;
pub use auth::Auth;
pub use citizen_reporting::CitizenReporting;
pub use dashboard::Dashboard;
pub use emergency_report::EmergencyReport;
pub use landing::Landing;
pub use my_reports::MyReports;
pub use report_details::ReportDetails;
pub use social_feed::SocialFeed;

/// Shared card chrome.
pub(crate) const CARD_STYLE: &str =
    "background: white; border: 1px solid #E5E7EB; border-radius: 8px; padding: 16px;";

pub(crate) const INPUT_STYLE: &str =
    "width: 100%; box-sizing: border-box; padding: 8px 10px; border: 1px solid #D1D5DB; border-radius: 6px; font-size: 14px;";

pub(crate) const PRIMARY_BUTTON_STYLE: &str =
    "padding: 10px 16px; border: none; border-radius: 6px; background: #2563EB; color: white; font-weight: 600; cursor: pointer;";

pub(crate) const SECONDARY_BUTTON_STYLE: &str =
    "padding: 8px 14px; border: 1px solid #D1D5DB; border-radius: 6px; background: white; color: #374151; cursor: pointer;";


/// Append an entry to the admin audit log, stamped with the browser clock.
pub(crate) fn record_audit(
    db: &Database,
    actor: &str,
    action: &str,
    details: String,
    kind: AuditKind,
) -> anyhow::Result<()> {
    let now = js_bridge::wall_clock();
    db.insert_audit_log(&AuditLog {
        id: format!("log_{}", now.timestamp_millis()),
        timestamp: now,
        actor: actor.to_string(),
        action: action.to_string(),
        details,
        kind,
    })
}

/// Display name of whoever is signed in.
pub(crate) fn actor_name(state: &cw_ui::state::AppState) -> String {
    state
        .navigator
        .peek()
        .user()
        .map(|u| u.username.clone())
        .unwrap_or_else(|| cw_core::user::User::GUEST_NAME.to_string())
}
