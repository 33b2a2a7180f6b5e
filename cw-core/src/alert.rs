use crate::records::{field, reader};
use crate::CoreError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Embedded CSV of seed emergency alerts. Times are relative (`minutes_ago`).
pub static CSV_OBJECT: &str = include_str!("../../fixtures/alerts.csv");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    High,
    Critical,
    Severe,
}

impl AlertLevel {
    pub const ALL: [AlertLevel; 3] = [AlertLevel::High, AlertLevel::Critical, AlertLevel::Severe];

    pub fn as_str(self) -> &'static str {
        match self {
            AlertLevel::High => "high",
            AlertLevel::Critical => "critical",
            AlertLevel::Severe => "severe",
        }
    }

    /// Header colour of the popup card.
    pub fn color(self) -> &'static str {
        match self {
            AlertLevel::Critical => "#DC2626",
            AlertLevel::Severe => "#B91C1C",
            AlertLevel::High => "#F97316",
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(AlertLevel::High),
            "critical" => Ok(AlertLevel::Critical),
            "severe" => Ok(AlertLevel::Severe),
            other => Err(CoreError::unknown("alert level", other)),
        }
    }
}

/// An emergency alert shown in the dashboard overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyAlert {
    pub id: String,
    pub area_name: String,
    pub level: AlertLevel,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub affected_population: u32,
    pub report_count: u32,
}

impl EmergencyAlert {
    /// Parse the seed alert CSV, anchoring `minutes_ago` to `now`.
    ///
    /// Expected columns (with headers): `id,area_name,level,description,
    /// minutes_ago,affected_population,report_count`
    pub fn parse_alert_csv(csv_data: &str, now: DateTime<Utc>) -> anyhow::Result<Vec<EmergencyAlert>> {
        let mut rdr = reader(csv_data);
        let mut alerts = Vec::new();
        for row in rdr.records() {
            let r = row?;
            let minutes_ago: i64 = field(&r, 4).parse()?;
            alerts.push(EmergencyAlert {
                id: field(&r, 0).to_string(),
                area_name: field(&r, 1).to_string(),
                level: field(&r, 2).parse()?,
                description: field(&r, 3).to_string(),
                timestamp: now - Duration::minutes(minutes_ago),
                affected_population: field(&r, 5).parse()?,
                report_count: field(&r, 6).parse()?,
            });
        }
        Ok(alerts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_seed_alerts_relative_to_now() {
        let now = Utc.with_ymd_and_hms(2025, 9, 8, 16, 0, 0).unwrap();
        let alerts = EmergencyAlert::parse_alert_csv(CSV_OBJECT, now).unwrap();
        assert_eq!(alerts.len(), 3);
        assert_eq!(alerts[0].id, "alert_001");
        assert_eq!(alerts[0].level, AlertLevel::Critical);
        assert_eq!(alerts[0].timestamp, now - Duration::minutes(5));
        assert_eq!(alerts[2].affected_population, 45000);
    }

    #[test]
    fn level_round_trips_through_str() {
        for level in AlertLevel::ALL {
            assert_eq!(level.as_str().parse::<AlertLevel>(), Ok(level));
        }
    }
}
