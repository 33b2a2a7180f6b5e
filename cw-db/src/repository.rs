//! Storage seam used by the screens, the simulation driver and the CLI.

use crate::models::StatusCounts;
use crate::Database;
use cw_core::report::{Report, ReportStatus};
use cw_core::social::SocialPost;

/// Read/write access to reports and social posts.
///
/// Screens hold a `Database` but call through this trait, so the mock
/// feeds and any future backing store plug in at one place.
pub trait HazardRepository {
    /// All reports, newest submissions first.
    fn reports(&self) -> anyhow::Result<Vec<Report>>;

    fn report(&self, id: &str) -> anyhow::Result<Option<Report>>;

    fn reports_by(&self, reporter: &str) -> anyhow::Result<Vec<Report>>;

    fn status_counts(&self, reporter: Option<&str>) -> anyhow::Result<StatusCounts>;

    fn add_report(&self, report: &Report) -> anyhow::Result<()>;

    /// Returns `false` when the id is unknown.
    fn set_status(&self, id: &str, status: ReportStatus, notes: Option<&str>) -> anyhow::Result<bool>;

    fn social_posts(&self) -> anyhow::Result<Vec<SocialPost>>;

    fn add_social_post(&self, post: &SocialPost) -> anyhow::Result<()>;

    /// The report to show on the details screen: the selected one, or the
    /// first report when nothing (or an unknown id) is selected.
    fn report_or_first(&self, id: Option<&str>) -> anyhow::Result<Option<Report>> {
        if let Some(id) = id {
            if let Some(report) = self.report(id)? {
                return Ok(Some(report));
            }
        }
        Ok(self.reports()?.into_iter().next())
    }
}

impl HazardRepository for Database {
    fn reports(&self) -> anyhow::Result<Vec<Report>> {
        self.query_reports()
    }

    fn report(&self, id: &str) -> anyhow::Result<Option<Report>> {
        self.query_report(id)
    }

    fn reports_by(&self, reporter: &str) -> anyhow::Result<Vec<Report>> {
        self.query_reports_by_reporter(reporter)
    }

    fn status_counts(&self, reporter: Option<&str>) -> anyhow::Result<StatusCounts> {
        self.query_status_counts(reporter)
    }

    fn add_report(&self, report: &Report) -> anyhow::Result<()> {
        self.insert_report(report)
    }

    fn set_status(&self, id: &str, status: ReportStatus, notes: Option<&str>) -> anyhow::Result<bool> {
        self.update_report_status(id, status, notes)
    }

    fn social_posts(&self) -> anyhow::Result<Vec<SocialPost>> {
        self.query_social_posts()
    }

    fn add_social_post(&self, post: &SocialPost) -> anyhow::Result<()> {
        self.insert_social_post(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_or_first_falls_back() {
        let db = Database::with_fixtures().unwrap();
        let repo: &dyn HazardRepository = &db;

        let picked = repo.report_or_first(Some("r_003")).unwrap().unwrap();
        assert_eq!(picked.id, "r_003");

        let fallback = repo.report_or_first(Some("alert_001")).unwrap().unwrap();
        assert_eq!(fallback.id, "r_001", "unknown ids fall back to the first report");

        let none_selected = repo.report_or_first(None).unwrap().unwrap();
        assert_eq!(none_selected.id, "r_001");
    }

    #[test]
    fn empty_store_has_no_details_report() {
        let db = Database::new().unwrap();
        assert!(db.report_or_first(None).unwrap().is_none());
    }
}
