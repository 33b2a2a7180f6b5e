//! SQL schema for the in-memory SQLite store.
//!
//! Applied as a single batch when the database is created.

/// Returns the full SQL schema as a single batch string.
///
/// **Reports and feeds:**
/// - `reports` - citizen hazard reports; `position` orders the list, newest
///   submissions get the lowest value
/// - `social_posts` - monitored social media posts, ordered the same way
/// - `emergency_alerts` - seed alerts, ages stored relative to load time
///
/// **Administration:**
/// - `system_users` - accounts on the admin users tab
/// - `audit_logs` - admin and verifier actions
///
/// **Analytics:**
/// - `hazard_trends`, `region_stats`, `source_shares`, `verification_trends`
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS reports (
        id TEXT PRIMARY KEY,
        position INTEGER NOT NULL,
        hazard TEXT NOT NULL,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL,
        urgency INTEGER NOT NULL CHECK (urgency BETWEEN 0 AND 100),
        status TEXT NOT NULL,
        timestamp TEXT NOT NULL,
        reporter TEXT NOT NULL,
        trust_score INTEGER NOT NULL CHECK (trust_score BETWEEN 0 AND 100),
        location TEXT,
        description TEXT,
        verifier_notes TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_reports_reporter ON reports(reporter);
    CREATE INDEX IF NOT EXISTS idx_reports_status ON reports(status);

    CREATE TABLE IF NOT EXISTS social_posts (
        id TEXT PRIMARY KEY,
        position INTEGER NOT NULL,
        platform TEXT NOT NULL,
        username TEXT NOT NULL,
        display_name TEXT NOT NULL,
        text TEXT NOT NULL,
        sentiment TEXT NOT NULL,
        timestamp TEXT NOT NULL,
        latitude REAL,
        longitude REAL,
        location TEXT,
        likes INTEGER NOT NULL DEFAULT 0,
        comments INTEGER NOT NULL DEFAULT 0,
        shares INTEGER NOT NULL DEFAULT 0,
        views INTEGER,
        keywords TEXT NOT NULL DEFAULT '',
        verified INTEGER NOT NULL DEFAULT 0
    );

    CREATE TABLE IF NOT EXISTS emergency_alerts (
        id TEXT PRIMARY KEY,
        area_name TEXT NOT NULL,
        level TEXT NOT NULL,
        description TEXT NOT NULL,
        minutes_ago INTEGER NOT NULL,
        affected_population INTEGER NOT NULL,
        report_count INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS system_users (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        role TEXT NOT NULL,
        status TEXT NOT NULL,
        last_active TEXT NOT NULL,
        reports_submitted INTEGER,
        reports_verified INTEGER
    );

    CREATE TABLE IF NOT EXISTS audit_logs (
        id TEXT PRIMARY KEY,
        timestamp TEXT NOT NULL,
        actor TEXT NOT NULL,
        action TEXT NOT NULL,
        details TEXT NOT NULL,
        kind TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_audit_timestamp ON audit_logs(timestamp);

    CREATE TABLE IF NOT EXISTS hazard_trends (
        date TEXT NOT NULL,
        hazard TEXT NOT NULL,
        count INTEGER NOT NULL,
        PRIMARY KEY (date, hazard)
    );

    CREATE TABLE IF NOT EXISTS region_stats (
        region TEXT PRIMARY KEY,
        reports INTEGER NOT NULL,
        verified INTEGER NOT NULL,
        percentage INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS source_shares (
        name TEXT PRIMARY KEY,
        position INTEGER NOT NULL,
        value INTEGER NOT NULL,
        color TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS verification_trends (
        date TEXT PRIMARY KEY,
        verified INTEGER NOT NULL,
        pending INTEGER NOT NULL,
        dismissed INTEGER NOT NULL
    );
    "#
}
