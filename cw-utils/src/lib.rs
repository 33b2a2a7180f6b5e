//! Shared utility functions for CoastalWatch crates.

/// Date and time helpers
pub mod dates {
    use chrono::{DateTime, NaiveDate, Utc};

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
    }

    /// Parse an RFC 3339 timestamp into UTC
    pub fn parse_timestamp(s: &str) -> anyhow::Result<DateTime<Utc>> {
        Ok(DateTime::parse_from_rfc3339(s.trim())?.with_timezone(&Utc))
    }

    /// Wall clock label "HH:MM", as shown next to queued submissions
    pub fn clock_label(at: &DateTime<Utc>) -> String {
        at.format("%H:%M").to_string()
    }

    /// "YYYY-MM-DD HH:MM", used in report and audit tables
    pub fn format_datetime(at: &DateTime<Utc>) -> String {
        at.format("%Y-%m-%d %H:%M").to_string()
    }

    /// Relative age label for alerts and feed items.
    ///
    /// Under a minute is "Just now", under an hour "Nm ago", otherwise
    /// "Nh ago". Timestamps in the future count as "Just now".
    pub fn format_time_ago(then: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
        let minutes = (*now - *then).num_minutes();
        if minutes < 1 {
            "Just now".to_string()
        } else if minutes < 60 {
            format!("{}m ago", minutes)
        } else {
            format!("{}h ago", minutes / 60)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::{Duration, TimeZone};

        fn now() -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2025, 9, 8, 16, 0, 0).unwrap()
        }

        #[test]
        fn test_time_ago_buckets() {
            let now = now();
            assert_eq!(format_time_ago(&(now - Duration::seconds(59)), &now), "Just now");
            assert_eq!(format_time_ago(&(now - Duration::minutes(1)), &now), "1m ago");
            assert_eq!(format_time_ago(&(now - Duration::minutes(59)), &now), "59m ago");
            assert_eq!(format_time_ago(&(now - Duration::minutes(60)), &now), "1h ago");
            assert_eq!(format_time_ago(&(now - Duration::minutes(185)), &now), "3h ago");
        }

        #[test]
        fn test_future_timestamp_is_just_now() {
            let now = now();
            assert_eq!(format_time_ago(&(now + Duration::minutes(5)), &now), "Just now");
        }

        #[test]
        fn test_clock_and_datetime_labels() {
            let at = Utc.with_ymd_and_hms(2025, 9, 8, 9, 5, 0).unwrap();
            assert_eq!(clock_label(&at), "09:05");
            assert_eq!(format_datetime(&at), "2025-09-08 09:05");
        }

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2025, 9, 8).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2025-09-08");
            assert_eq!(parse_date(&formatted).unwrap(), date);
            assert!(parse_date("08/09/2025").is_err());
        }

        #[test]
        fn test_parse_timestamp_normalises_offset() {
            let ts = parse_timestamp("2025-09-08T20:54:00+05:30").unwrap();
            assert_eq!(ts, Utc.with_ymd_and_hms(2025, 9, 8, 15, 24, 0).unwrap());
        }
    }
}

/// Analytics export naming
pub mod export {
    use chrono::NaiveDate;

    /// Date ranges offered on the analytics screen.
    pub const DATE_RANGES: [(&str, &str); 4] = [
        ("24h", "Last 24 Hours"),
        ("7d", "Last 7 Days"),
        ("30d", "Last 30 Days"),
        ("90d", "Last 90 Days"),
    ];

    /// Export formats offered on the analytics screen.
    pub const FORMATS: [(&str, &str); 3] = [("pdf", "PDF"), ("csv", "CSV"), ("xlsx", "Excel")];

    /// `coastal-hazard-analytics-{range}-{YYYY-MM-DD}.{format}`
    pub fn export_filename(range: &str, format: &str, on: &NaiveDate) -> String {
        format!(
            "coastal-hazard-analytics-{}-{}.{}",
            range,
            super::dates::format_date(on),
            format
        )
    }

}
