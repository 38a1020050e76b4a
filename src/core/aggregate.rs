//! Check-ins → per-person, per-day meal presence and per-meal headcounts.

use crate::errors::{AppError, AppResult};
use crate::models::attendance::{AttendanceRow, AttendanceSummary, DayKey, MealTotals};
use crate::models::check_in::CheckInRecord;
use crate::models::meal::Meal;
use crate::utils::time::parse_clock_12h;
use std::collections::{HashMap, HashSet};

/// True when `roll_number` contains `filter`, ignoring case.
/// An empty filter matches everything.
pub fn matches_roll_filter(roll_number: &str, filter: &str) -> bool {
    filter.is_empty() || roll_number.to_lowercase().contains(&filter.to_lowercase())
}

/// Meal bucket of a record's clock string, `None` when outside every window.
pub fn classify(record: &CheckInRecord) -> AppResult<Option<Meal>> {
    let minute = parse_clock_12h(&record.time).map_err(|reason| AppError::MalformedRecord {
        record: record.label(),
        reason,
    })?;
    Ok(Meal::from_minute(minute))
}

pub struct AttendanceLogic;

impl AttendanceLogic {
    /// Build the presence rows and meal totals for `records`.
    ///
    /// Rows come out in the order their (person, day) key is first seen.
    /// Any record whose `time` cannot be parsed fails the whole call.
    pub fn aggregate(
        records: &[CheckInRecord],
        filter: Option<&str>,
    ) -> AppResult<AttendanceSummary> {
        let filter = filter.unwrap_or("");

        let mut index: HashMap<DayKey, usize> = HashMap::new();
        let mut rows: Vec<AttendanceRow> = Vec::new();
        let mut seen: [HashSet<DayKey>; 4] = Default::default();

        for rec in records
            .iter()
            .filter(|r| matches_roll_filter(&r.roll_number, filter))
        {
            let Some(meal) = classify(rec)? else {
                continue;
            };

            let key = DayKey {
                identifier_id: rec.identifier_id.clone(),
                date: rec.timestamp.date_naive(),
            };

            let pos = *index.entry(key.clone()).or_insert_with(|| {
                rows.push(AttendanceRow::absent(
                    rec.identifier_id.clone(),
                    rec.display_name.clone(),
                    rec.roll_number.clone(),
                    key.date,
                ));
                rows.len() - 1
            });

            rows[pos].mark_present(meal);
            seen[meal.index()].insert(key);
        }

        let mut totals = MealTotals::default();
        for meal in Meal::ALL {
            totals.set(meal, seen[meal.index()].len());
        }

        Ok(AttendanceSummary { rows, totals })
    }
}
