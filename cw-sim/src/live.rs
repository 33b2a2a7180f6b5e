//! Applying simulation events to the repository.
//!
//! Shared by the browser app and the CLI.

use crate::SimEvent;
use cw_db::HazardRepository;

/// What the host has to refresh after a batch of events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Applied {
    /// New network state, if it flipped.
    pub offline: Option<bool>,
    /// Reports or posts were written.
    pub data_changed: bool,
    pub new_reports: usize,
    pub new_posts: usize,
}

pub fn apply_events<R: HazardRepository + ?Sized>(repo: &R, events: Vec<SimEvent>) -> anyhow::Result<Applied> {
    let mut applied = Applied::default();
    for event in events {
        match event {
            SimEvent::OfflineChanged(offline) => applied.offline = Some(offline),
            SimEvent::NewReport(report) => {
                log::info!("[CW] live: new {} report {}", report.hazard, report.id);
                repo.add_report(&report)?;
                applied.new_reports += 1;
                applied.data_changed = true;
            }
            SimEvent::NewPost(post) => {
                log::info!("[CW] live: new {} post {}", post.platform, post.id);
                repo.add_social_post(&post)?;
                applied.new_posts += 1;
                applied.data_changed = true;
            }
            SimEvent::NewAlert(_) | SimEvent::AlertsLoaded(_) | SimEvent::UploadSynced(_) => {}
        }
    }
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use cw_db::Database;
    use crate::MockFeed;

    #[test]
    fn new_reports_and_posts_are_prepended() {
        let db = Database::with_fixtures().unwrap();
        let now = Utc.with_ymd_and_hms(2025, 9, 8, 17, 0, 0).unwrap();
        let mut feed = MockFeed::seeded(1);
        let report = feed.new_report(now);
        let post = feed.new_post(now);

        let applied = apply_events(
            &db,
            vec![
                SimEvent::NewReport(report.clone()),
                SimEvent::NewPost(post.clone()),
                SimEvent::OfflineChanged(true),
            ],
        )
        .unwrap();

        assert_eq!(applied.offline, Some(true));
        assert!(applied.data_changed);
        assert_eq!((applied.new_reports, applied.new_posts), (1, 1));
        assert_eq!(db.reports().unwrap()[0].id, report.id);
        assert_eq!(db.reports().unwrap().len(), 9);
        assert_eq!(db.social_posts().unwrap()[0].id, post.id);
    }

    #[test]
    fn overlay_events_leave_the_store_alone() {
        let db = Database::with_fixtures().unwrap();
        let applied = apply_events(&db, vec![SimEvent::AlertsLoaded(2), SimEvent::UploadSynced("q1".into())]).unwrap();
        assert_eq!(applied, Applied::default());
        assert_eq!(db.reports().unwrap().len(), 8);
    }
}
