use crate::records::{field, parse_timestamp, reader};
use crate::CoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Embedded CSV of audit log entries.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/audit_logs.csv");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditKind {
    Verification,
    System,
    UserManagement,
    Data,
}

impl AuditKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AuditKind::Verification => "verification",
            AuditKind::System => "system",
            AuditKind::UserManagement => "user_management",
            AuditKind::Data => "data",
        }
    }

    /// Icon tint on the audit log tab.
    pub fn color(self) -> &'static str {
        match self {
            AuditKind::Verification => "#22C55E",
            AuditKind::System => "#3B82F6",
            AuditKind::UserManagement => "#A855F7",
            AuditKind::Data => "#F97316",
        }
    }
}

impl FromStr for AuditKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "verification" => Ok(AuditKind::Verification),
            "system" => Ok(AuditKind::System),
            "user_management" => Ok(AuditKind::UserManagement),
            "data" => Ok(AuditKind::Data),
            other => Err(CoreError::unknown("audit kind", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub actor: String,
    pub action: String,
    pub details: String,
    pub kind: AuditKind,
}

impl AuditLog {
    /// Expected columns (with headers): `id,timestamp,actor,action,details,kind`
    pub fn parse_audit_csv(csv_data: &str) -> anyhow::Result<Vec<AuditLog>> {
        let mut rdr = reader(csv_data);
        let mut logs = Vec::new();
        for row in rdr.records() {
            let r = row?;
            logs.push(AuditLog {
                id: field(&r, 0).to_string(),
                timestamp: parse_timestamp(field(&r, 1))?,
                actor: field(&r, 2).to_string(),
                action: field(&r, 3).to_string(),
                details: field(&r, 4).to_string(),
                kind: field(&r, 5).parse()?,
            });
        }
        Ok(logs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_embedded_audit_log() {
        let logs = AuditLog::parse_audit_csv(CSV_OBJECT).unwrap();
        assert_eq!(logs.len(), 4);
        assert_eq!(logs[2].kind, AuditKind::UserManagement);
        assert_eq!(logs[3].actor, "System");
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let csv = "id,timestamp,actor,action,details,kind\nl,2025-09-08T16:45:00Z,a,b,c,gossip\n";
        assert!(AuditLog::parse_audit_csv(csv).is_err());
    }
}
