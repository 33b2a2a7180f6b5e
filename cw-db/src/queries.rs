//! Typed query and update methods.
//!
//! Lists come back in display order: reports and social posts by their
//! `position` column (newest submissions first), audit logs newest first,
//! analytics series chronologically.

use crate::loader::{write_audit_log, write_report, write_social_post};
use crate::models::{
    AuditLogRow, ReportRow, SocialPostRow, StatusCounts, SystemUserRow, REPORT_COLUMNS,
    SOCIAL_COLUMNS,
};
use crate::Database;
use chrono::{DateTime, Duration, Utc};
use cw_core::alert::EmergencyAlert;
use cw_core::analytics::{HazardTrendPoint, Kpis, RegionStat, SourceShare, VerificationPoint};
use cw_core::audit::AuditLog;
use cw_core::report::{Report, ReportStatus, Urgency};
use cw_core::social::SocialPost;
use cw_core::user::{AccountStatus, SystemUser, UserRole};
use rusqlite::{params, OptionalExtension};

/// KPI card values with no backing series.
const VERIFIED_24H: u32 = 67;
const AVERAGE_RESPONSE_MINUTES: u32 = 12;
const ACTIVE_SOURCES: u32 = 8;

impl Database {
    // ───────────────────── Reports ─────────────────────

    /// All reports in display order.
    pub fn query_reports(&self) -> anyhow::Result<Vec<Report>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM reports ORDER BY position",
            REPORT_COLUMNS
        ))?;
        let rows = stmt
            .query_map([], ReportRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        let reports = rows
            .into_iter()
            .map(ReportRow::into_report)
            .collect::<anyhow::Result<Vec<_>>>()?;
        log::info!("[CW] query: query_reports returned {} records", reports.len());
        Ok(reports)
    }

    pub fn query_report(&self, id: &str) -> anyhow::Result<Option<Report>> {
        let conn = self.conn.borrow();
        let row = conn
            .query_row(
                &format!("SELECT {} FROM reports WHERE id = ?1", REPORT_COLUMNS),
                params![id],
                ReportRow::from_row,
            )
            .optional()?;
        row.map(ReportRow::into_report).transpose()
    }

    /// Reports filed under one reporter name, in display order.
    pub fn query_reports_by_reporter(&self, reporter: &str) -> anyhow::Result<Vec<Report>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM reports WHERE reporter = ?1 ORDER BY position",
            REPORT_COLUMNS
        ))?;
        let rows = stmt
            .query_map(params![reporter], ReportRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        let reports = rows
            .into_iter()
            .map(ReportRow::into_report)
            .collect::<anyhow::Result<Vec<_>>>()?;
        log::info!(
            "[CW] query: query_reports_by_reporter({}) returned {} records",
            reporter,
            reports.len()
        );
        Ok(reports)
    }

    pub fn query_reports_by_status(&self, status: ReportStatus) -> anyhow::Result<Vec<Report>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM reports WHERE status = ?1 ORDER BY position",
            REPORT_COLUMNS
        ))?;
        let rows = stmt
            .query_map(params![status.as_str()], ReportRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().map(ReportRow::into_report).collect()
    }

    /// Per-status counts, optionally restricted to one reporter.
    pub fn query_status_counts(&self, reporter: Option<&str>) -> anyhow::Result<StatusCounts> {
        let conn = self.conn.borrow();
        let counts = conn.query_row(
            "SELECT COUNT(*),
                    COALESCE(SUM(status = 'unverified'), 0),
                    COALESCE(SUM(status = 'under-review'), 0),
                    COALESCE(SUM(status = 'verified'), 0),
                    COALESCE(SUM(status = 'dismissed'), 0),
                    COALESCE(SUM(urgency >= ?2), 0)
             FROM reports
             WHERE ?1 IS NULL OR reporter = ?1",
            params![reporter, Urgency::URGENT],
            |row| {
                Ok(StatusCounts {
                    total: row.get(0)?,
                    unverified: row.get(1)?,
                    under_review: row.get(2)?,
                    verified: row.get(3)?,
                    dismissed: row.get(4)?,
                    urgent: row.get(5)?,
                })
            },
        )?;
        Ok(counts)
    }

    /// Insert a report at the head of the list.
    pub fn insert_report(&self, report: &Report) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let position: i64 =
            conn.query_row("SELECT COALESCE(MIN(position), 0) - 1 FROM reports", [], |row| {
                row.get(0)
            })?;
        write_report(&conn, report, position)?;
        log::info!("[CW] query: inserted report {} ({})", report.id, report.hazard);
        Ok(())
    }

    /// Set a report's status, and its verifier notes when given.
    ///
    /// Any status may follow any other. Returns `false` when no report
    /// has the id.
    pub fn update_report_status(
        &self,
        id: &str,
        status: ReportStatus,
        notes: Option<&str>,
    ) -> anyhow::Result<bool> {
        let conn = self.conn.borrow();
        let changed = conn.execute(
            "UPDATE reports
             SET status = ?2, verifier_notes = COALESCE(?3, verifier_notes)
             WHERE id = ?1",
            params![id, status.as_str(), notes],
        )?;
        log::info!("[CW] query: report {} -> {} ({} rows)", id, status, changed);
        Ok(changed > 0)
    }

    // ───────────────────── Social ─────────────────────

    pub fn query_social_posts(&self) -> anyhow::Result<Vec<SocialPost>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM social_posts ORDER BY position",
            SOCIAL_COLUMNS
        ))?;
        let rows = stmt
            .query_map([], SocialPostRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        let posts = rows
            .into_iter()
            .map(SocialPostRow::into_post)
            .collect::<anyhow::Result<Vec<_>>>()?;
        log::info!("[CW] query: query_social_posts returned {} records", posts.len());
        Ok(posts)
    }

    /// Insert a post at the head of the feed.
    pub fn insert_social_post(&self, post: &SocialPost) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let position: i64 = conn.query_row(
            "SELECT COALESCE(MIN(position), 0) - 1 FROM social_posts",
            [],
            |row| row.get(0),
        )?;
        write_social_post(&conn, post, position)
    }

    // ───────────────────── Alerts ─────────────────────

    /// Seed alerts, most recent first, with ages anchored to `now`.
    pub fn query_seed_alerts(&self, now: DateTime<Utc>) -> anyhow::Result<Vec<EmergencyAlert>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT id, area_name, level, description, minutes_ago, affected_population, report_count
             FROM emergency_alerts
             ORDER BY minutes_ago, id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, i64>(4)?,
                    row.get::<_, u32>(5)?,
                    row.get::<_, u32>(6)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut alerts = Vec::with_capacity(rows.len());
        for (id, area_name, level, description, minutes_ago, affected_population, report_count) in rows {
            alerts.push(EmergencyAlert {
                id,
                area_name,
                level: level.parse()?,
                description,
                timestamp: now - Duration::minutes(minutes_ago),
                affected_population,
                report_count,
            });
        }
        Ok(alerts)
    }

    // ───────────────────── Users & audit ─────────────────────

    pub fn query_system_users(&self) -> anyhow::Result<Vec<SystemUser>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT id, name, email, role, status, last_active, reports_submitted, reports_verified
             FROM system_users
             ORDER BY id",
        )?;
        let rows = stmt
            .query_map([], SystemUserRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().map(SystemUserRow::into_user).collect()
    }

    pub fn update_user_role(&self, id: &str, role: UserRole) -> anyhow::Result<bool> {
        let conn = self.conn.borrow();
        let changed = conn.execute(
            "UPDATE system_users SET role = ?2 WHERE id = ?1",
            params![id, role.as_str()],
        )?;
        Ok(changed > 0)
    }

    pub fn update_user_status(&self, id: &str, status: AccountStatus) -> anyhow::Result<bool> {
        let conn = self.conn.borrow();
        let changed = conn.execute(
            "UPDATE system_users SET status = ?2 WHERE id = ?1",
            params![id, status.as_str()],
        )?;
        Ok(changed > 0)
    }

    /// Audit log, newest first.
    pub fn query_audit_logs(&self) -> anyhow::Result<Vec<AuditLog>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT id, timestamp, actor, action, details, kind
             FROM audit_logs
             ORDER BY timestamp DESC, id DESC",
        )?;
        let rows = stmt
            .query_map([], AuditLogRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().map(AuditLogRow::into_log).collect()
    }

    pub fn insert_audit_log(&self, log: &AuditLog) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        write_audit_log(&conn, log)
    }

    // ───────────────────── Analytics ─────────────────────

    pub fn query_hazard_trends(&self) -> anyhow::Result<Vec<HazardTrendPoint>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT date, hazard, count FROM hazard_trends ORDER BY date, rowid",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, u32>(2)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        let mut points = Vec::with_capacity(rows.len());
        for (date, hazard, count) in rows {
            points.push(HazardTrendPoint {
                date,
                hazard: hazard.parse()?,
                count,
            });
        }
        Ok(points)
    }

    /// Total reports per day across hazard types, chronologically.
    pub fn query_daily_totals(&self) -> anyhow::Result<Vec<(String, u32)>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT date, SUM(count) FROM hazard_trends GROUP BY date ORDER BY date",
        )?;
        let rows: Vec<(String, u32)> = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn query_region_stats(&self) -> anyhow::Result<Vec<RegionStat>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT region, reports, verified, percentage FROM region_stats ORDER BY rowid",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(RegionStat {
                    region: row.get(0)?,
                    reports: row.get(1)?,
                    verified: row.get(2)?,
                    percentage: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn query_source_shares(&self) -> anyhow::Result<Vec<SourceShare>> {
        let conn = self.conn.borrow();
        let mut stmt =
            conn.prepare("SELECT name, value, color FROM source_shares ORDER BY position")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(SourceShare {
                    name: row.get(0)?,
                    value: row.get(1)?,
                    color: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn query_verification_trends(&self) -> anyhow::Result<Vec<VerificationPoint>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT date, verified, pending, dismissed FROM verification_trends ORDER BY date",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(VerificationPoint {
                    date: row.get(0)?,
                    verified: row.get(1)?,
                    pending: row.get(2)?,
                    dismissed: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Headline KPIs.
    ///
    /// The 24h total and its trend come from the last two days of the
    /// hazard series; the peak region is the one with the most reports.
    pub fn query_kpis(&self) -> anyhow::Result<Kpis> {
        let totals = self.query_daily_totals()?;
        let latest = totals.last().map(|(_, n)| *n).unwrap_or(0);
        let trend_percent = match totals.len().checked_sub(2).map(|i| totals[i].1) {
            Some(previous) if previous > 0 => {
                (latest as f64 - previous as f64) / previous as f64 * 100.0
            }
            _ => 0.0,
        };

        let conn = self.conn.borrow();
        let peak_urgency_region: String = conn
            .query_row(
                "SELECT region FROM region_stats ORDER BY reports DESC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()?
            .unwrap_or_default();

        Ok(Kpis {
            total_reports_24h: latest,
            verified_count: VERIFIED_24H,
            peak_urgency_region,
            average_response_minutes: AVERAGE_RESPONSE_MINUTES,
            active_sources: ACTIVE_SOURCES,
            trend_percent,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use chrono::{Duration, TimeZone, Utc};
    use cw_core::audit::{AuditKind, AuditLog};
    use cw_core::hazard::HazardType;
    use cw_core::report::{Report, ReportStatus};
    use cw_core::social::SocialPost;
    use cw_core::user::{AccountStatus, User, UserRole};

    fn fixture_db() -> Database {
        Database::with_fixtures().unwrap()
    }

    #[test]
    fn query_reports_keeps_fixture_order() {
        let db = fixture_db();
        let ids: Vec<_> = db.query_reports().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            vec!["r_001", "r_002", "r_003", "ur_001", "ur_002", "ur_003", "ur_004", "ur_005"]
        );
    }

    #[test]
    fn insert_report_goes_to_the_head() {
        let db = fixture_db();
        let at = Utc.with_ymd_and_hms(2025, 9, 8, 17, 0, 0).unwrap();
        let report = Report::submitted("new_1", HazardType::Flooding, "Guest User", at);
        db.insert_report(&report).unwrap();

        let reports = db.query_reports().unwrap();
        assert_eq!(reports.len(), 9);
        assert_eq!(reports[0], report);

        let second = Report::submitted("new_2", HazardType::Tsunami, "Guest User", at);
        db.insert_report(&second).unwrap();
        assert_eq!(db.query_reports().unwrap()[0].id, "new_2");
    }

    #[test]
    fn query_report_by_id() {
        let db = fixture_db();
        let report = db.query_report("r_002").unwrap().unwrap();
        assert_eq!(report.hazard, HazardType::OilSpill);
        assert_eq!(report.status, ReportStatus::Verified);
        assert!(db.query_report("nope").unwrap().is_none());
    }

    #[test]
    fn guest_owns_the_my_reports_fixtures() {
        let db = fixture_db();
        let mine = db.query_reports_by_reporter(User::GUEST_NAME).unwrap();
        assert_eq!(mine.len(), 5);
        assert!(mine.iter().all(|r| r.id.starts_with("ur_")));
    }

    #[test]
    fn status_counts_for_guest() {
        let db = fixture_db();
        let counts = db.query_status_counts(Some(User::GUEST_NAME)).unwrap();
        assert_eq!(counts.total, 5);
        assert_eq!(counts.verified, 1);
        assert_eq!(counts.under_review, 1);
        assert_eq!(counts.unverified, 2, "pending rows are stored as unverified");
        assert_eq!(counts.dismissed, 1);
        assert_eq!(counts.urgent, 1);

        let all = db.query_status_counts(None).unwrap();
        assert_eq!(all.total, 8);
        assert_eq!(all.urgent, 2);
    }

    #[test]
    fn status_transitions_are_unconstrained() {
        let db = fixture_db();
        for status in [
            ReportStatus::Dismissed,
            ReportStatus::Verified,
            ReportStatus::Unverified,
            ReportStatus::UnderReview,
        ] {
            assert!(db.update_report_status("ur_004", status, None).unwrap());
            assert_eq!(db.query_report("ur_004").unwrap().unwrap().status, status);
        }
        assert!(!db
            .update_report_status("missing", ReportStatus::Verified, None)
            .unwrap());
    }

    #[test]
    fn update_status_keeps_notes_unless_given() {
        let db = fixture_db();
        db.update_report_status("ur_001", ReportStatus::UnderReview, None)
            .unwrap();
        let report = db.query_report("ur_001").unwrap().unwrap();
        assert!(report.verifier_notes.unwrap().starts_with("Verified by coastal guard"));

        db.update_report_status("ur_001", ReportStatus::Verified, Some("Rechecked"))
            .unwrap();
        let report = db.query_report("ur_001").unwrap().unwrap();
        assert_eq!(report.verifier_notes.as_deref(), Some("Rechecked"));
    }

    #[test]
    fn social_posts_round_trip_through_sql() {
        let db = fixture_db();
        let from_db = db.query_social_posts().unwrap();
        let from_csv = SocialPost::parse_social_csv(cw_core::social::CSV_OBJECT).unwrap();
        assert_eq!(from_db, from_csv);
    }

    #[test]
    fn inserted_post_keeps_keywords_and_geo() {
        let db = fixture_db();
        let mut post = db.query_social_posts().unwrap().remove(0);
        post.id = "s_new".into();
        post.keywords = vec!["high waves".into(), "chennai".into(), "alert".into()];
        post.geo = Some(cw_core::social::GeoPoint { latitude: 13.05, longitude: 80.28 });
        db.insert_social_post(&post).unwrap();

        let stored = db.query_social_posts().unwrap();
        let back = stored.iter().find(|p| p.id == "s_new").expect("inserted post");
        assert_eq!(back.keywords, post.keywords);
        assert_eq!(back.geo, post.geo);
    }

    #[test]
    fn seed_alerts_are_anchored_to_now() {
        let db = fixture_db();
        let now = Utc.with_ymd_and_hms(2025, 9, 8, 16, 0, 0).unwrap();
        let alerts = db.query_seed_alerts(now).unwrap();
        let ids: Vec<_> = alerts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["alert_001", "alert_002", "alert_003"]);
        assert_eq!(alerts[1].timestamp, now - Duration::minutes(12));
    }

    #[test]
    fn user_role_and_status_updates() {
        let db = fixture_db();
        assert!(db.update_user_role("u_004", UserRole::Official).unwrap());
        assert!(db.update_user_status("u_005", AccountStatus::Active).unwrap());
        assert!(!db.update_user_role("u_999", UserRole::Admin).unwrap());

        let users = db.query_system_users().unwrap();
        assert_eq!(users[3].role, UserRole::Official);
        assert_eq!(users[4].status, AccountStatus::Active);
    }

    #[test]
    fn audit_log_is_newest_first() {
        let db = fixture_db();
        let entry = AuditLog {
            id: "log_005".into(),
            timestamp: Utc.with_ymd_and_hms(2025, 9, 8, 17, 0, 0).unwrap(),
            actor: "Admin".into(),
            action: "Status changed".into(),
            details: "u_005 set to active".into(),
            kind: AuditKind::UserManagement,
        };
        db.insert_audit_log(&entry).unwrap();
        let logs = db.query_audit_logs().unwrap();
        assert_eq!(logs.len(), 5);
        assert_eq!(logs[0], entry);
        assert_eq!(logs[4].id, "log_004");
    }

    #[test]
    fn daily_totals_and_kpis() {
        let db = fixture_db();
        let totals = db.query_daily_totals().unwrap();
        assert_eq!(totals.len(), 7);
        assert_eq!(totals[6], ("2025-09-08".to_string(), 94));
        assert_eq!(totals[5].1, 77);

        let kpis = db.query_kpis().unwrap();
        assert_eq!(kpis.total_reports_24h, 94);
        assert_eq!(kpis.peak_urgency_region, "Chennai");
        assert!((kpis.trend_percent - 22.08).abs() < 0.01, "got {}", kpis.trend_percent);
    }

    #[test]
    fn kpis_on_empty_database() {
        let db = Database::new().unwrap();
        let kpis = db.query_kpis().unwrap();
        assert_eq!(kpis.total_reports_24h, 0);
        assert_eq!(kpis.trend_percent, 0.0);
        assert!(kpis.peak_urgency_region.is_empty());
    }

    #[test]
    fn analytics_series_in_order() {
        let db = fixture_db();
        let trends = db.query_hazard_trends().unwrap();
        assert_eq!(trends.len(), 35);
        assert_eq!(trends[0].hazard, HazardType::HighWaves);
        assert_eq!(trends[0].date, "2025-09-02");

        let shares = db.query_source_shares().unwrap();
        assert_eq!(shares[0].name, "Citizen Reports");
        assert_eq!(shares[3].value, 2);

        let regions = db.query_region_stats().unwrap();
        assert_eq!(regions[2].region, "Visakhapatnam");

        let verification = db.query_verification_trends().unwrap();
        assert_eq!(verification.last().unwrap().verified, 89);
    }
}
