//! Timestamp Utilities
//!
//! Backend timestamps arrive as strings: RFC 3339, naive ISO 8601 (which
//! the agent pipeline writes in UTC), or an RFC 2822 / HTTP date.

use chrono::{DateTime, Local, NaiveDateTime, Utc};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a backend timestamp into UTC
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// Format for display in the browser's local time zone.
///
/// `None` and blank values render as `placeholder`; strings that do not
/// parse are shown as-is.
pub fn format_timestamp(raw: Option<&str>, placeholder: &str) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => placeholder.to_string(),
        Some(s) => match parse_timestamp(s) {
            Some(dt) => dt.with_timezone(&Local).format(DISPLAY_FORMAT).to_string(),
            None => s.to_string(),
        },
    }
}
