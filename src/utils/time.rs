//! Time utilities: 12-hour clock strings <-> minute of day.

use chrono::{NaiveTime, Timelike};

/// Parse a `"H:MM am|pm"` clock string into its minute of day.
///
/// `12 am` is midnight and `12 pm` is noon. The suffix is matched
/// case-insensitively; hours must be 1..=12 and minutes 0..=59.
pub fn parse_clock_12h(s: &str) -> Result<u32, String> {
    let t = NaiveTime::parse_from_str(s.trim(), "%I:%M %p")
        .map_err(|e| format!("invalid clock '{}': {e}", s.trim()))?;
    Ok(t.hour() * 60 + t.minute())
}

/// Format a time as the stored clock string, e.g. `08:15 am`.
pub fn format_clock_12h(t: &NaiveTime) -> String {
    t.format("%I:%M %P").to_string()
}
