//! CSV loading for populating the in-memory SQLite store.
//!
//! Row parsing goes through the `cw-core` parsers so fixture rows get the
//! same validation as anything else entering the store. The seed alerts are
//! the exception: they keep a relative `minutes_ago` column, which is only
//! anchored to a clock at query time.
//!
//! # CSV Formats (all with headers)
//!
//! - **Reports**: `id,hazard,latitude,longitude,urgency,status,timestamp,reporter,trust_score,location,description,verifier_notes`
//! - **Social posts**: `id,platform,username,display_name,text,sentiment,timestamp,latitude,longitude,location,likes,comments,shares,views,keywords,verified`
//! - **Alerts**: `id,area_name,level,description,minutes_ago,affected_population,report_count`
//! - **System users**: `id,name,email,role,status,last_active,reports_submitted,reports_verified`
//! - **Audit logs**: `id,timestamp,actor,action,details,kind`
//! - **Analytics**: see [`cw_core::analytics`]

use crate::Database;
use cw_core::alert::AlertLevel;
use cw_core::analytics;
use cw_core::audit::AuditLog;
use cw_core::report::Report;
use cw_core::social::SocialPost;
use cw_core::user::SystemUser;
use rusqlite::{params, Connection};

pub(crate) fn write_report(conn: &Connection, report: &Report, position: i64) -> anyhow::Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO reports (id, position, hazard, latitude, longitude, urgency,
                                         status, timestamp, reporter, trust_score, location,
                                         description, verifier_notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            report.id,
            position,
            report.hazard.label(),
            report.latitude,
            report.longitude,
            report.urgency.value(),
            report.status.as_str(),
            report.timestamp.to_rfc3339(),
            report.reporter,
            report.trust_score.value(),
            report.location,
            report.description,
            report.verifier_notes,
        ],
    )?;
    Ok(())
}

pub(crate) fn write_social_post(conn: &Connection, post: &SocialPost, position: i64) -> anyhow::Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO social_posts (id, position, platform, username, display_name, text,
                                              sentiment, timestamp, latitude, longitude, location,
                                              likes, comments, shares, views, keywords, verified)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)",
        params![
            post.id,
            position,
            post.platform.as_str(),
            post.username,
            post.display_name,
            post.text,
            post.sentiment.as_str(),
            post.timestamp.to_rfc3339(),
            post.geo.map(|g| g.latitude),
            post.geo.map(|g| g.longitude),
            post.location,
            post.engagement.likes,
            post.engagement.comments,
            post.engagement.shares,
            post.engagement.views,
            post.keywords.join(";"),
            post.verified,
        ],
    )?;
    Ok(())
}

pub(crate) fn write_audit_log(conn: &Connection, log: &AuditLog) -> anyhow::Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO audit_logs (id, timestamp, actor, action, details, kind)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            log.id,
            log.timestamp.to_rfc3339(),
            log.actor,
            log.action,
            log.details,
            log.kind.as_str(),
        ],
    )?;
    Ok(())
}

/// Next position at the end of an ordered table.
fn next_position(conn: &Connection, table: &str) -> anyhow::Result<i64> {
    let sql = format!("SELECT COALESCE(MAX(position), -1) + 1 FROM {}", table);
    Ok(conn.query_row(&sql, [], |row| row.get(0))?)
}

impl Database {
    /// Load reports from CSV, appended after any existing rows.
    pub fn load_reports(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let reports = Report::parse_report_csv(csv_data)?;
        let start = next_position(&conn, "reports")?;
        for (offset, report) in reports.iter().enumerate() {
            write_report(&conn, report, start + offset as i64)?;
        }
        log::info!("[CW] loader: Loaded {} reports", reports.len());
        Ok(())
    }

    /// Load social posts from CSV, appended after any existing rows.
    pub fn load_social_posts(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let posts = SocialPost::parse_social_csv(csv_data)?;
        let start = next_position(&conn, "social_posts")?;
        for (offset, post) in posts.iter().enumerate() {
            write_social_post(&conn, post, start + offset as i64)?;
        }
        log::info!("[CW] loader: Loaded {} social posts", posts.len());
        Ok(())
    }

    /// Load the seed emergency alerts.
    ///
    /// Rows with an unknown alert level are skipped.
    pub fn load_alerts(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let id = r.get(0).unwrap_or("").trim();
            let area_name = r.get(1).unwrap_or("").trim();
            let level = match r.get(2).unwrap_or("").parse::<AlertLevel>() {
                Ok(level) => level,
                Err(e) => {
                    log::warn!("[CW] loader: skipping alert {}: {}", id, e);
                    skipped += 1;
                    continue;
                }
            };
            let description = r.get(3).unwrap_or("").trim();
            let minutes_ago: i64 = r.get(4).unwrap_or("0").trim().parse()?;
            let affected_population: u32 = r.get(5).unwrap_or("0").trim().parse()?;
            let report_count: u32 = r.get(6).unwrap_or("0").trim().parse()?;

            conn.execute(
                "INSERT OR REPLACE INTO emergency_alerts (id, area_name, level, description,
                                                          minutes_ago, affected_population, report_count)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    id,
                    area_name,
                    level.as_str(),
                    description,
                    minutes_ago,
                    affected_population,
                    report_count
                ],
            )?;
            count += 1;
        }
        log::info!("[CW] loader: Loaded {} alerts, skipped {}", count, skipped);
        Ok(())
    }

    pub fn load_system_users(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let users = SystemUser::parse_system_user_csv(csv_data)?;
        for u in &users {
            conn.execute(
                "INSERT OR REPLACE INTO system_users (id, name, email, role, status, last_active,
                                                      reports_submitted, reports_verified)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    u.id,
                    u.name,
                    u.email,
                    u.role.as_str(),
                    u.status.as_str(),
                    u.last_active.to_rfc3339(),
                    u.reports_submitted,
                    u.reports_verified,
                ],
            )?;
        }
        log::info!("[CW] loader: Loaded {} system users", users.len());
        Ok(())
    }

    pub fn load_audit_logs(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let logs = AuditLog::parse_audit_csv(csv_data)?;
        for log in &logs {
            write_audit_log(&conn, log)?;
        }
        log::info!("[CW] loader: Loaded {} audit log entries", logs.len());
        Ok(())
    }

    /// Load the four analytics series in one go.
    pub fn load_analytics(
        &self,
        hazard_trends_csv: &str,
        region_stats_csv: &str,
        source_shares_csv: &str,
        verification_trends_csv: &str,
    ) -> anyhow::Result<()> {
        let conn = self.conn.borrow();

        let trends = analytics::parse_hazard_trends(hazard_trends_csv)?;
        for p in &trends {
            conn.execute(
                "INSERT OR REPLACE INTO hazard_trends (date, hazard, count) VALUES (?1, ?2, ?3)",
                params![p.date, p.hazard.label(), p.count],
            )?;
        }

        let regions = analytics::parse_region_stats(region_stats_csv)?;
        for s in &regions {
            conn.execute(
                "INSERT OR REPLACE INTO region_stats (region, reports, verified, percentage)
                 VALUES (?1, ?2, ?3, ?4)",
                params![s.region, s.reports, s.verified, s.percentage],
            )?;
        }

        let shares = analytics::parse_source_shares(source_shares_csv)?;
        for (position, s) in shares.iter().enumerate() {
            conn.execute(
                "INSERT OR REPLACE INTO source_shares (name, position, value, color)
                 VALUES (?1, ?2, ?3, ?4)",
                params![s.name, position as i64, s.value, s.color],
            )?;
        }

        let verification = analytics::parse_verification_trends(verification_trends_csv)?;
        for p in &verification {
            conn.execute(
                "INSERT OR REPLACE INTO verification_trends (date, verified, pending, dismissed)
                 VALUES (?1, ?2, ?3, ?4)",
                params![p.date, p.verified, p.pending, p.dismissed],
            )?;
        }

        log::info!(
            "[CW] loader: Loaded analytics ({} trend points, {} regions, {} sources, {} verification days)",
            trends.len(),
            regions.len(),
            shares.len(),
            verification.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    fn count(db: &Database, table: &str) -> i64 {
        db.conn
            .borrow()
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn load_reports_appends_positions() {
        let db = Database::new().unwrap();
        db.load_reports(cw_core::report::CSV_OBJECT).unwrap();
        assert_eq!(count(&db, "reports"), 8);

        let max: i64 = db
            .conn
            .borrow()
            .query_row("SELECT MAX(position) FROM reports", [], |row| row.get(0))
            .unwrap();
        assert_eq!(max, 7);
    }

    #[test]
    fn load_reports_rejects_bad_rows() {
        let db = Database::new().unwrap();
        let csv = "\
id,hazard,latitude,longitude,urgency,status,timestamp,reporter,trust_score
r_x,Meteor,1.0,2.0,40,verified,2025-09-08T15:24:00Z,Someone,50
";
        assert!(db.load_reports(csv).is_err());
    }

    #[test]
    fn load_alerts_skips_unknown_level() {
        let db = Database::new().unwrap();
        let csv = "\
id,area_name,level,description,minutes_ago,affected_population,report_count
a1,Somewhere,critical,Bad,5,100,2
a2,Elsewhere,apocalyptic,Worse,1,10,1
";
        db.load_alerts(csv).unwrap();
        assert_eq!(count(&db, "emergency_alerts"), 1);
    }

    #[test]
    fn load_embedded_fixtures() {
        let db = Database::with_fixtures().unwrap();
        assert_eq!(count(&db, "reports"), 8);
        assert_eq!(count(&db, "social_posts"), 5);
        assert_eq!(count(&db, "emergency_alerts"), 3);
        assert_eq!(count(&db, "system_users"), 5);
        assert_eq!(count(&db, "audit_logs"), 4);
        assert_eq!(count(&db, "hazard_trends"), 35);
        assert_eq!(count(&db, "region_stats"), 5);
        assert_eq!(count(&db, "source_shares"), 4);
        assert_eq!(count(&db, "verification_trends"), 7);
    }
}
