//! Date window → inclusive UTC instant interval → stored check-ins.

use crate::errors::{AppError, AppResult};
use crate::models::check_in::CheckInRecord;
use crate::utils::date::{parse_date, to_storage_precision};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};

/// Read side of the check-in storage.
///
/// Implementations return every record whose timestamp lies in the closed
/// interval `[lower, upper]`; no ordering is required.
pub trait CheckInStore {
    fn records_between(
        &self,
        lower: &DateTime<Utc>,
        upper: &DateTime<Utc>,
    ) -> AppResult<Vec<CheckInRecord>>;
}

/// Plain in-memory records, kept in their given order.
///
/// Timestamps are compared at millisecond precision, as SQLite stores them.
impl CheckInStore for [CheckInRecord] {
    fn records_between(
        &self,
        lower: &DateTime<Utc>,
        upper: &DateTime<Utc>,
    ) -> AppResult<Vec<CheckInRecord>> {
        Ok(self
            .iter()
            .filter(|r| {
                let ts = to_storage_precision(r.timestamp);
                ts >= *lower && ts <= *upper
            })
            .cloned()
            .collect())
    }
}

impl CheckInStore for Vec<CheckInRecord> {
    fn records_between(
        &self,
        lower: &DateTime<Utc>,
        upper: &DateTime<Utc>,
    ) -> AppResult<Vec<CheckInRecord>> {
        self.as_slice().records_between(lower, upper)
    }
}

/// Calendar window given as two `YYYY-MM-DD` days, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Parse both ends. Order is not checked here, see [`DateRange::ensure_ordered`].
    pub fn parse(from: &str, to: &str) -> AppResult<Self> {
        if from.trim().is_empty() || to.trim().is_empty() {
            return Err(AppError::InvalidRange("missing from or to date".into()));
        }

        let from_d = parse_date(from)
            .ok_or_else(|| AppError::InvalidRange(format!("invalid from date '{from}'")))?;
        let to_d = parse_date(to)
            .ok_or_else(|| AppError::InvalidRange(format!("invalid to date '{to}'")))?;

        Ok(Self {
            from: from_d,
            to: to_d,
        })
    }

    /// Reject windows whose start lies after their end.
    pub fn ensure_ordered(self) -> AppResult<Self> {
        if self.from > self.to {
            return Err(AppError::InvalidRange(format!(
                "from date {} is after to date {}",
                self.from, self.to
            )));
        }
        Ok(self)
    }

    /// `from` at 00:00:00.000 UTC.
    pub fn lower_bound(&self) -> DateTime<Utc> {
        self.from.and_time(NaiveTime::MIN).and_utc()
    }

    /// `to` at 23:59:59.999 UTC.
    pub fn upper_bound(&self) -> DateTime<Utc> {
        let start = self.to.and_time(NaiveTime::MIN).and_utc();
        start + TimeDelta::days(1) - TimeDelta::milliseconds(1)
    }

    pub fn bounds(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.lower_bound(), self.upper_bound())
    }

    pub fn label(&self) -> String {
        if self.from == self.to {
            self.from.to_string()
        } else {
            format!("{} → {}", self.from, self.to)
        }
    }
}

/// Fetch every check-in stored for the `from..=to` day window.
pub fn fetch_range<S>(store: &S, from: &str, to: &str) -> AppResult<Vec<CheckInRecord>>
where
    S: CheckInStore + ?Sized,
{
    let range = DateRange::parse(from, to)?;
    fetch(store, &range)
}

/// Same as [`fetch_range`] for an already parsed window.
pub fn fetch<S>(store: &S, range: &DateRange) -> AppResult<Vec<CheckInRecord>>
where
    S: CheckInStore + ?Sized,
{
    let (lower, upper) = range.bounds();
    store.records_between(&lower, &upper)
}
