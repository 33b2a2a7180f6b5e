//! Report listing.

use cw_core::report::{Report, ReportStatus};
use cw_db::{Database, HazardRepository};
use std::io::Write;

/// Write reports as CSV with headers, in the fixture column order.
pub fn write_csv<W: Write>(reports: &[Report], out: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record([
        "id", "hazard", "latitude", "longitude", "urgency", "status", "timestamp", "reporter",
        "trust_score", "location",
    ])?;
    for r in reports {
        wtr.write_record([
            r.id.clone(),
            r.hazard.label().to_string(),
            r.latitude.to_string(),
            r.longitude.to_string(),
            r.urgency.value().to_string(),
            r.status.as_str().to_string(),
            r.timestamp.to_rfc3339(),
            r.reporter.clone(),
            r.trust_score.value().to_string(),
            r.location.clone().unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn select_reports(db: &Database, status: Option<&str>) -> anyhow::Result<Vec<Report>> {
    match status {
        Some(s) => {
            let status: ReportStatus = s.parse()?;
            db.query_reports_by_status(status)
        }
        None => db.reports(),
    }
}

pub fn run_reports(status: Option<&str>, json: bool) -> anyhow::Result<()> {
    let db = Database::with_fixtures()?;
    let reports = select_reports(&db, status)?;
    log::info!("[CW] reports: {} selected", reports.len());

    let stdout = std::io::stdout();
    if json {
        let mut out = stdout.lock();
        serde_json::to_writer_pretty(&mut out, &reports)?;
        writeln!(out)?;
    } else {
        write_csv(&reports, stdout.lock())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_by_status() {
        let db = Database::with_fixtures().unwrap();
        let all = select_reports(&db, None).unwrap();
        let verified = select_reports(&db, Some("verified")).unwrap();
        assert_eq!(all.len(), 8);
        assert!(!verified.is_empty());
        assert!(verified.iter().all(|r| r.status == ReportStatus::Verified));
        assert!(select_reports(&db, Some("lost")).is_err());
    }

    #[test]
    fn csv_has_header_and_one_row_per_report() {
        let db = Database::with_fixtures().unwrap();
        let reports = select_reports(&db, None).unwrap();
        let mut buf = Vec::new();
        write_csv(&reports, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[0].starts_with("id,hazard,latitude"));
        assert!(lines[1].starts_with("r_001,"));
    }
}
