//! Timestamp parsing and calendar field derivation.
//!
//! `created_at` values are parsed as RFC 3339 timestamps (`Z` or a numeric
//! offset, converted to UTC). Timestamps without an offset are accepted and
//! interpreted as UTC. Weekdays are numbered Monday = 0 through Sunday = 6.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};

/// Offset-less layouts accepted after RFC 3339 fails.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an ISO-8601 timestamp into UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("'{}' is not an ISO-8601 timestamp", raw))
}

/// Calendar fields derived from a UTC timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarFields {
    pub date: NaiveDate,
    /// Hour of day, 0-23
    pub hour: u8,
    /// Day of week, Monday = 0
    pub weekday: u8,
}

impl CalendarFields {
    pub fn from_datetime(dt: &DateTime<Utc>) -> Self {
        Self {
            date: dt.date_naive(),
            hour: dt.hour() as u8,
            weekday: dt.weekday().num_days_from_monday() as u8,
        }
    }
}
