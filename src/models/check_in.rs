use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One card swipe as stored in `check_ins`.
///
/// `timestamp` and `time` are both kept: the day of a row comes from
/// `timestamp` (UTC), the meal bucket from the 12-hour `time` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInRecord {
    #[serde(default, skip_serializing)]
    pub id: i64, // ⇔ check_ins.id (0 = not yet stored)

    #[serde(alias = "uniqueId")]
    pub identifier_id: String, // ⇔ check_ins.identifier_id

    #[serde(default, alias = "name")]
    pub display_name: String, // ⇔ check_ins.display_name

    #[serde(default, alias = "rollNo")]
    pub roll_number: String, // ⇔ check_ins.roll_number

    #[serde(alias = "date")]
    pub timestamp: DateTime<Utc>, // ⇔ check_ins.timestamp (TEXT, RFC3339 UTC, millis)

    #[serde(default)]
    pub time: String, // ⇔ check_ins.time (TEXT "hh:mm am|pm")
}

impl CheckInRecord {
    /// Build a record for a swipe happening at `timestamp`.
    /// The clock string is derived from the same instant, which is kept
    /// at millisecond precision like the stored form.
    pub fn new(
        identifier_id: impl Into<String>,
        display_name: impl Into<String>,
        roll_number: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let timestamp = crate::utils::date::to_storage_precision(timestamp);
        Self {
            id: 0,
            identifier_id: identifier_id.into(),
            display_name: display_name.into(),
            roll_number: roll_number.into(),
            time: crate::utils::time::format_clock_12h(&timestamp.time()),
            timestamp,
        }
    }

    /// Short human label used in error messages.
    pub fn label(&self) -> String {
        format!(
            "'{}' ({}) at {}",
            self.identifier_id,
            self.roll_number,
            crate::utils::date::format_timestamp(&self.timestamp)
        )
    }
}
