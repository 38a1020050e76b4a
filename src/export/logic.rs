// src/export/logic.rs

use crate::core::range::CheckInStore;
use crate::core::summary::build_summary;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::rows_to_export;
use crate::export::xlsx::export_xlsx;
use crate::models::attendance::AttendanceSummary;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Build the attendance summary for `from..=to` and write it to `file`.
    ///
    /// - `file` must be an absolute path
    /// - an existing file is only replaced with `force` or after confirmation
    /// - an empty summary writes nothing
    ///
    /// Returns the summary that was exported.
    pub fn export<S>(
        store: &S,
        format: ExportFormat,
        file: &str,
        from: &str,
        to: &str,
        filter: Option<&str>,
        force: bool,
    ) -> AppResult<AttendanceSummary>
    where
        S: CheckInStore + ?Sized,
    {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let (_, summary) = build_summary(store, from, to, filter)?;

        if summary.is_empty() {
            warning("No attendance rows found for the selected range, nothing exported.");
            return Ok(summary);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows_to_export(&summary.rows), path)?,
            ExportFormat::Json => export_json(&summary, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows_to_export(&summary.rows), path)?,
        }

        Ok(summary)
    }
}
