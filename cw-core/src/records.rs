//! Small helpers shared by the fixture CSV parsers.

use chrono::{DateTime, Utc};
use csv::StringRecord;

/// Trimmed field at `idx`, empty when the column is missing.
pub(crate) fn field(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("").trim()
}

/// Trimmed field at `idx`, `None` when missing or blank.
pub(crate) fn optional(record: &StringRecord, idx: usize) -> Option<String> {
    let value = field(record, idx);
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

pub(crate) fn parse_timestamp(value: &str) -> anyhow::Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc))
}

pub(crate) fn reader(csv_data: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes())
}
