//! Row shapes read back from SQLite, and small aggregate models.
//!
//! Enum columns are stored as their string form; the `into_*` conversions
//! parse them back through the `cw-core` types so a bad row surfaces as an
//! error instead of a silently wrong value.

use chrono::{DateTime, Utc};
use cw_core::audit::AuditLog;
use cw_core::report::{Report, TrustScore, Urgency};
use cw_core::social::{split_keywords, Engagement, GeoPoint, SocialPost};
use cw_core::user::SystemUser;
use rusqlite::Row;
use serde::Serialize;

/// Report counts per status, for the stat cards on the dashboard and
/// the my-reports screen.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: u32,
    pub unverified: u32,
    pub under_review: u32,
    pub verified: u32,
    pub dismissed: u32,
    /// Reports at or above the urgent threshold, any status.
    pub urgent: u32,
}

pub(crate) fn parse_ts(value: &str) -> anyhow::Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc))
}

pub(crate) const REPORT_COLUMNS: &str = "id, hazard, latitude, longitude, urgency, status, \
     timestamp, reporter, trust_score, location, description, verifier_notes";

pub(crate) struct ReportRow {
    id: String,
    hazard: String,
    latitude: f64,
    longitude: f64,
    urgency: i64,
    status: String,
    timestamp: String,
    reporter: String,
    trust_score: i64,
    location: Option<String>,
    description: Option<String>,
    verifier_notes: Option<String>,
}

impl ReportRow {
    /// Expects the columns in [`REPORT_COLUMNS`] order.
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            hazard: row.get(1)?,
            latitude: row.get(2)?,
            longitude: row.get(3)?,
            urgency: row.get(4)?,
            status: row.get(5)?,
            timestamp: row.get(6)?,
            reporter: row.get(7)?,
            trust_score: row.get(8)?,
            location: row.get(9)?,
            description: row.get(10)?,
            verifier_notes: row.get(11)?,
        })
    }

    pub(crate) fn into_report(self) -> anyhow::Result<Report> {
        Ok(Report {
            id: self.id,
            hazard: self.hazard.parse()?,
            latitude: self.latitude,
            longitude: self.longitude,
            urgency: Urgency::new(self.urgency)?,
            status: self.status.parse()?,
            timestamp: parse_ts(&self.timestamp)?,
            reporter: self.reporter,
            trust_score: TrustScore::new(self.trust_score)?,
            location: self.location,
            description: self.description,
            verifier_notes: self.verifier_notes,
        })
    }
}

pub(crate) const SOCIAL_COLUMNS: &str = "id, platform, username, display_name, text, sentiment, \
     timestamp, latitude, longitude, location, likes, comments, shares, views, keywords, verified";

pub(crate) struct SocialPostRow {
    id: String,
    platform: String,
    username: String,
    display_name: String,
    text: String,
    sentiment: String,
    timestamp: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
    location: Option<String>,
    likes: u32,
    comments: u32,
    shares: u32,
    views: Option<u32>,
    keywords: String,
    verified: bool,
}

impl SocialPostRow {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            platform: row.get(1)?,
            username: row.get(2)?,
            display_name: row.get(3)?,
            text: row.get(4)?,
            sentiment: row.get(5)?,
            timestamp: row.get(6)?,
            latitude: row.get(7)?,
            longitude: row.get(8)?,
            location: row.get(9)?,
            likes: row.get(10)?,
            comments: row.get(11)?,
            shares: row.get(12)?,
            views: row.get(13)?,
            keywords: row.get(14)?,
            verified: row.get(15)?,
        })
    }

    pub(crate) fn into_post(self) -> anyhow::Result<SocialPost> {
        let geo = match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(GeoPoint {
                latitude,
                longitude,
            }),
            _ => None,
        };
        Ok(SocialPost {
            id: self.id,
            platform: self.platform.parse()?,
            username: self.username,
            display_name: self.display_name,
            text: self.text,
            sentiment: self.sentiment.parse()?,
            timestamp: parse_ts(&self.timestamp)?,
            geo,
            location: self.location,
            engagement: Engagement {
                likes: self.likes,
                comments: self.comments,
                shares: self.shares,
                views: self.views,
            },
            keywords: split_keywords(&self.keywords),
            verified: self.verified,
        })
    }
}

pub(crate) struct SystemUserRow {
    id: String,
    name: String,
    email: String,
    role: String,
    status: String,
    last_active: String,
    reports_submitted: Option<u32>,
    reports_verified: Option<u32>,
}

impl SystemUserRow {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            role: row.get(3)?,
            status: row.get(4)?,
            last_active: row.get(5)?,
            reports_submitted: row.get(6)?,
            reports_verified: row.get(7)?,
        })
    }

    pub(crate) fn into_user(self) -> anyhow::Result<SystemUser> {
        Ok(SystemUser {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role.parse()?,
            status: self.status.parse()?,
            last_active: parse_ts(&self.last_active)?,
            reports_submitted: self.reports_submitted,
            reports_verified: self.reports_verified,
        })
    }
}

pub(crate) struct AuditLogRow {
    id: String,
    timestamp: String,
    actor: String,
    action: String,
    details: String,
    kind: String,
}

impl AuditLogRow {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            timestamp: row.get(1)?,
            actor: row.get(2)?,
            action: row.get(3)?,
            details: row.get(4)?,
            kind: row.get(5)?,
        })
    }

    pub(crate) fn into_log(self) -> anyhow::Result<AuditLog> {
        Ok(AuditLog {
            id: self.id,
            timestamp: parse_ts(&self.timestamp)?,
            actor: self.actor,
            action: self.action,
            details: self.details,
            kind: self.kind.parse()?,
        })
    }
}
