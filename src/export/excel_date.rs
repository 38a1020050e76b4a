// src/export/excel_date.rs

use chrono::NaiveDate;

/// Excel day serial of `d` (1900 date system, epoch 1899-12-30).
pub(crate) fn date_to_excel_serial(d: &NaiveDate) -> Option<f64> {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((*d - excel_epoch).num_days() as f64)
}

/// If `s` is a `YYYY-MM-DD` date, its Excel serial.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<f64> {
    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    date_to_excel_serial(&d)
}
