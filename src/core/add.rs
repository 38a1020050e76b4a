use crate::core::aggregate::classify;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::insert_check_in;
use crate::errors::{AppError, AppResult};
use crate::models::check_in::CheckInRecord;
use crate::ui::messages::{success, warning};
use crate::utils::date::format_timestamp;
use chrono::{DateTime, Utc};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Record one swipe for `identifier` at `at` (UTC), defaulting to now.
    pub fn apply(
        pool: &mut DbPool,
        identifier: &str,
        name: &str,
        roll: &str,
        at: Option<DateTime<Utc>>,
    ) -> AppResult<CheckInRecord> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(AppError::Import("identifier must not be empty".into()));
        }

        let at = at.unwrap_or_else(Utc::now);
        let mut rec = CheckInRecord::new(identifier, name.trim(), roll.trim(), at);
        rec.id = insert_check_in(&pool.conn, &rec, "cli")?;

        let when = format_timestamp(&rec.timestamp);
        match classify(&rec)? {
            Some(meal) => success(format!(
                "Recorded check-in for {} at {} ({}).",
                rec.identifier_id, when, meal
            )),
            None => warning(format!(
                "Recorded check-in for {} at {}, outside every meal window.",
                rec.identifier_id, when
            )),
        }

        ttlog_or_warn(
            &pool.conn,
            "add",
            &rec.identifier_id,
            &format!("Check-in #{} at {} ({})", rec.id, when, rec.time),
        );

        Ok(rec)
    }
}
