//! Analytics series shown on the analytics screen.

use crate::hazard::HazardType;
use crate::records::{field, reader};
use serde::{Deserialize, Serialize};

pub static HAZARD_TRENDS_CSV: &str = include_str!("../../fixtures/hazard_trends.csv");
pub static REGION_STATS_CSV: &str = include_str!("../../fixtures/region_stats.csv");
pub static SOURCE_SHARES_CSV: &str = include_str!("../../fixtures/source_shares.csv");
pub static VERIFICATION_TRENDS_CSV: &str = include_str!("../../fixtures/verification_trends.csv");

/// Daily report count for one hazard type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardTrendPoint {
    /// `YYYY-MM-DD`
    pub date: String,
    pub hazard: HazardType,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionStat {
    pub region: String,
    pub reports: u32,
    pub verified: u32,
    /// Share of reports that were actionable, 0-100.
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceShare {
    pub name: String,
    pub value: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationPoint {
    /// `MM-DD`
    pub date: String,
    pub verified: u32,
    pub pending: u32,
    pub dismissed: u32,
}

/// Headline numbers for the KPI cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    pub total_reports_24h: u32,
    pub verified_count: u32,
    pub peak_urgency_region: String,
    pub average_response_minutes: u32,
    pub active_sources: u32,
    /// Day-over-day change in total reports, percent.
    pub trend_percent: f64,
}

pub fn parse_hazard_trends(csv_data: &str) -> anyhow::Result<Vec<HazardTrendPoint>> {
    let mut rdr = reader(csv_data);
    let mut points = Vec::new();
    for row in rdr.records() {
        let r = row?;
        points.push(HazardTrendPoint {
            date: field(&r, 0).to_string(),
            hazard: field(&r, 1).parse()?,
            count: field(&r, 2).parse()?,
        });
    }
    Ok(points)
}

pub fn parse_region_stats(csv_data: &str) -> anyhow::Result<Vec<RegionStat>> {
    let mut rdr = reader(csv_data);
    let mut stats = Vec::new();
    for row in rdr.records() {
        let r = row?;
        stats.push(RegionStat {
            region: field(&r, 0).to_string(),
            reports: field(&r, 1).parse()?,
            verified: field(&r, 2).parse()?,
            percentage: field(&r, 3).parse()?,
        });
    }
    Ok(stats)
}

pub fn parse_source_shares(csv_data: &str) -> anyhow::Result<Vec<SourceShare>> {
    let mut rdr = reader(csv_data);
    let mut shares = Vec::new();
    for row in rdr.records() {
        let r = row?;
        shares.push(SourceShare {
            name: field(&r, 0).to_string(),
            value: field(&r, 1).parse()?,
            color: field(&r, 2).to_string(),
        });
    }
    Ok(shares)
}

pub fn parse_verification_trends(csv_data: &str) -> anyhow::Result<Vec<VerificationPoint>> {
    let mut rdr = reader(csv_data);
    let mut points = Vec::new();
    for row in rdr.records() {
        let r = row?;
        points.push(VerificationPoint {
            date: field(&r, 0).to_string(),
            verified: field(&r, 1).parse()?,
            pending: field(&r, 2).parse()?,
            dismissed: field(&r, 3).parse()?,
        });
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hazard_trends_cover_a_week_of_five_hazards() {
        let points = parse_hazard_trends(HAZARD_TRENDS_CSV).unwrap();
        assert_eq!(points.len(), 35);
        let last_high_waves = points
            .iter()
            .rev()
            .find(|p| p.hazard == HazardType::HighWaves)
            .unwrap();
        assert_eq!(last_high_waves.date, "2025-09-08");
        assert_eq!(last_high_waves.count, 42);
    }

    #[test]
    fn source_shares_sum_to_one_hundred() {
        let shares = parse_source_shares(SOURCE_SHARES_CSV).unwrap();
        assert_eq!(shares.iter().map(|s| s.value).sum::<u32>(), 100);
    }

    #[test]
    fn region_and_verification_fixtures_parse() {
        assert_eq!(parse_region_stats(REGION_STATS_CSV).unwrap().len(), 5);
        let verification = parse_verification_trends(VERIFICATION_TRENDS_CSV).unwrap();
        assert_eq!(verification.len(), 7);
        assert_eq!(verification[6].dismissed, 32);
    }
}
