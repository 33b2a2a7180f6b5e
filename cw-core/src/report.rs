use crate::hazard::HazardType;
use crate::records::{field, optional, parse_timestamp, reader};
use crate::CoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Embedded CSV of seed reports (dashboard reports plus the demo citizen's own).
pub static CSV_OBJECT: &str = include_str!("../../fixtures/reports.csv");

macro_rules! percent_score {
    ($name:ident, $err:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "i64", into = "u8")]
        pub struct $name(u8);

        impl $name {
            pub const MAX: u8 = 100;

            pub fn new(value: i64) -> Result<Self, CoreError> {
                if (0..=Self::MAX as i64).contains(&value) {
                    Ok(Self(value as u8))
                } else {
                    Err(CoreError::$err(value))
                }
            }

            /// Clamp any integer into 0-100.
            pub fn saturating(value: i64) -> Self {
                Self(value.clamp(0, Self::MAX as i64) as u8)
            }

            pub fn value(self) -> u8 {
                self.0
            }
        }

        impl TryFrom<i64> for $name {
            type Error = CoreError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for u8 {
            fn from(score: $name) -> u8 {
                score.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

percent_score!(Urgency, UrgencyOutOfRange);
percent_score!(TrustScore, TrustOutOfRange);

impl Urgency {
    /// Threshold at and above which a report is treated as urgent.
    pub const URGENT: u8 = 80;

    pub fn is_urgent(self) -> bool {
        self.0 >= Self::URGENT
    }
}

/// Verification status of a report.
///
/// Any status may be set from any other: the screens apply verification
/// actions without a transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportStatus {
    #[default]
    #[serde(alias = "pending")]
    Unverified,
    UnderReview,
    Verified,
    Dismissed,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 4] = [
        ReportStatus::Unverified,
        ReportStatus::UnderReview,
        ReportStatus::Verified,
        ReportStatus::Dismissed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReportStatus::Unverified => "unverified",
            ReportStatus::UnderReview => "under-review",
            ReportStatus::Verified => "verified",
            ReportStatus::Dismissed => "dismissed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportStatus::Unverified => "Pending",
            ReportStatus::UnderReview => "Under Review",
            ReportStatus::Verified => "Verified",
            ReportStatus::Dismissed => "Dismissed",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unverified" | "pending" => Ok(ReportStatus::Unverified),
            "under-review" | "under_review" => Ok(ReportStatus::UnderReview),
            "verified" => Ok(ReportStatus::Verified),
            "dismissed" => Ok(ReportStatus::Dismissed),
            other => Err(CoreError::unknown("report status", other)),
        }
    }
}

/// A single hazard report submitted by a citizen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub hazard: HazardType,
    pub latitude: f64,
    pub longitude: f64,
    pub urgency: Urgency,
    pub status: ReportStatus,
    pub timestamp: DateTime<Utc>,
    pub reporter: String,
    pub trust_score: TrustScore,
    /// Human readable place name, e.g. "Marina Beach, Chennai".
    pub location: Option<String>,
    pub description: Option<String>,
    pub verifier_notes: Option<String>,
}

impl Report {
    /// A fresh, unverified report as produced by a form submission.
    pub fn submitted(
        id: impl Into<String>,
        hazard: HazardType,
        reporter: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Report {
            id: id.into(),
            hazard,
            latitude: 0.0,
            longitude: 0.0,
            urgency: Urgency::saturating(50),
            status: ReportStatus::Unverified,
            timestamp,
            reporter: reporter.into(),
            trust_score: TrustScore::saturating(50),
            location: None,
            description: None,
            verifier_notes: None,
        }
    }

    pub fn is_urgent(&self) -> bool {
        self.urgency.is_urgent()
    }

    /// Case-insensitive match against hazard, location and description.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.hazard.label().to_lowercase().contains(&query)
            || self
                .location
                .as_deref()
                .is_some_and(|l| l.to_lowercase().contains(&query))
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&query))
    }

    /// Parse a CSV string of reports.
    ///
    /// Expected columns (with headers): `id,hazard,latitude,longitude,urgency,
    /// status,timestamp,reporter,trust_score,location,description,verifier_notes`
    pub fn parse_report_csv(csv_data: &str) -> anyhow::Result<Vec<Report>> {
        let mut rdr = reader(csv_data);
        let mut reports = Vec::new();
        for row in rdr.records() {
            let r = row?;
            reports.push(Report {
                id: field(&r, 0).to_string(),
                hazard: field(&r, 1).parse()?,
                latitude: field(&r, 2).parse()?,
                longitude: field(&r, 3).parse()?,
                urgency: Urgency::new(field(&r, 4).parse()?)?,
                status: field(&r, 5).parse()?,
                timestamp: parse_timestamp(field(&r, 6))?,
                reporter: field(&r, 7).to_string(),
                trust_score: TrustScore::new(field(&r, 8).parse()?)?,
                location: optional(&r, 9),
                description: optional(&r, 10),
                verifier_notes: optional(&r, 11),
            });
        }
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgency_rejects_out_of_range() {
        assert!(Urgency::new(100).is_ok());
        assert_eq!(Urgency::new(101), Err(CoreError::UrgencyOutOfRange(101)));
        assert_eq!(Urgency::new(-1), Err(CoreError::UrgencyOutOfRange(-1)));
    }

    #[test]
    fn urgency_saturates() {
        assert_eq!(Urgency::saturating(250).value(), 100);
        assert_eq!(Urgency::saturating(-4).value(), 0);
    }

    #[test]
    fn urgent_threshold_is_inclusive() {
        assert!(Urgency::saturating(80).is_urgent());
        assert!(!Urgency::saturating(79).is_urgent());
    }

    #[test]
    fn status_accepts_pending_alias() {
        assert_eq!("pending".parse::<ReportStatus>(), Ok(ReportStatus::Unverified));
        assert_eq!(
            "under-review".parse::<ReportStatus>(),
            Ok(ReportStatus::UnderReview)
        );
        assert!("archived".parse::<ReportStatus>().is_err());
    }

    #[test]
    fn status_serde_is_kebab_case() {
        let json = serde_json::to_string(&ReportStatus::UnderReview).unwrap();
        assert_eq!(json, "\"under-review\"");
        let parsed: ReportStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(parsed, ReportStatus::Unverified);
    }

    #[test]
    fn urgency_deserialize_checks_range() {
        assert!(serde_json::from_str::<Urgency>("42").is_ok());
        assert!(serde_json::from_str::<Urgency>("142").is_err());
    }

    #[test]
    fn parses_embedded_fixture() {
        let reports = Report::parse_report_csv(CSV_OBJECT).unwrap();
        assert_eq!(reports.len(), 8);

        let first = &reports[0];
        assert_eq!(first.id, "r_001");
        assert_eq!(first.hazard, HazardType::HighWaves);
        assert_eq!(first.urgency.value(), 78);
        assert_eq!(first.status, ReportStatus::Unverified);
        assert_eq!(first.reporter, "Ravi K");
        assert!(first.verifier_notes.is_none());

        let dismissed = reports.iter().find(|r| r.id == "ur_004").unwrap();
        assert_eq!(dismissed.status, ReportStatus::Dismissed);
        assert_eq!(
            dismissed.verifier_notes.as_deref(),
            Some("Normal tidal pooling, not a hazard. Regular monsoon effect.")
        );
    }

    #[test]
    fn parse_rejects_bad_urgency() {
        let csv = "\
id,hazard,latitude,longitude,urgency,status,timestamp,reporter,trust_score
r_x,Flooding,1.0,2.0,140,verified,2025-09-08T15:24:00Z,Someone,50
";
        assert!(Report::parse_report_csv(csv).is_err());
    }

    #[test]
    fn query_matches_location_case_insensitively() {
        let reports = Report::parse_report_csv(CSV_OBJECT).unwrap();
        let marina: Vec<_> = reports
            .iter()
            .filter(|r| r.matches_query("MARINA"))
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(marina, vec!["r_001", "ur_001"]);
        assert!(reports[0].matches_query("  "));
    }
}
