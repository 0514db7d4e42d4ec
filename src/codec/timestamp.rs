//! Date/time field pairs.
//!
//! Every timestamp is stored as two adjacent fields, `YYYY-MM-DD` and `HH:MM`.

use chrono::NaiveDateTime;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";
const COMBINED_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a date field and a time field as one local timestamp.
///
/// Returns a description of the offending pair on failure.
pub fn parse_pair(date: &str, time: &str) -> Result<NaiveDateTime, String> {
    let combined = format!("{} {}", date, time);
    NaiveDateTime::parse_from_str(&combined, COMBINED_FORMAT)
        .map_err(|e| format!("invalid date/time '{}': {}", combined, e))
}

/// Format a timestamp as its `(date, time)` field pair.
pub fn format_pair(at: &NaiveDateTime) -> (String, String) {
    (
        at.format(DATE_FORMAT).to_string(),
        at.format(TIME_FORMAT).to_string(),
    )
}

/// Format a timestamp as `YYYY-MM-DD HH:MM` for display.
pub fn format_display(at: &NaiveDateTime) -> String {
    at.format(COMBINED_FORMAT).to_string()
}
