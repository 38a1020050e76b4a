use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::insert_check_ins;
use crate::errors::{AppError, AppResult};
use crate::models::check_in::CheckInRecord;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::to_storage_precision;
use crate::utils::time::{format_clock_12h, parse_clock_12h};
use clap::ValueEnum;
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ImportFormat {
    Csv,
    Json,
}

impl ImportFormat {
    /// Guess the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

pub struct ImportLogic;

impl ImportLogic {
    /// Load, validate and store every record of `file`.
    ///
    /// Nothing is written unless every record is valid.
    pub fn import(
        pool: &mut DbPool,
        file: &str,
        format: Option<ImportFormat>,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        let format = format
            .or_else(|| ImportFormat::from_path(path))
            .ok_or_else(|| {
                AppError::Import(format!(
                    "cannot infer format of '{}', use --format csv|json",
                    path.display()
                ))
            })?;

        info(format!("Importing check-ins from {}", path.display()));

        let mut records = match format {
            ImportFormat::Csv => read_csv(path)?,
            ImportFormat::Json => read_json(path)?,
        };

        if records.is_empty() {
            warning("No check-ins found in the input file.");
            return Ok(0);
        }

        for (i, rec) in records.iter_mut().enumerate() {
            normalize(rec).map_err(|reason| {
                AppError::Import(format!("record #{}: {}", i + 1, reason))
            })?;
        }

        let n = insert_check_ins(pool, &records, "import")?;

        success(format!("Imported {} check-ins.", n));
        ttlog_or_warn(
            &pool.conn,
            "import",
            &path.display().to_string(),
            &format!("Imported {} check-ins", n),
        );

        Ok(n)
    }
}

pub fn read_csv(path: &Path) -> AppResult<Vec<CheckInRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| AppError::Import(format!("CSV open error: {e}")))?;

    let mut out = Vec::new();
    for (i, row) in rdr.deserialize::<CheckInRecord>().enumerate() {
        let rec = row.map_err(|e| AppError::Import(format!("CSV row {}: {e}", i + 1)))?;
        out.push(rec);
    }
    Ok(out)
}

pub fn read_json(path: &Path) -> AppResult<Vec<CheckInRecord>> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| AppError::Import(format!("JSON parse error: {e}")))
}

/// Fill a missing clock string from the timestamp and check the rest.
fn normalize(rec: &mut CheckInRecord) -> Result<(), String> {
    rec.id = 0;
    rec.timestamp = to_storage_precision(rec.timestamp);
    rec.identifier_id = rec.identifier_id.trim().to_string();

    if rec.identifier_id.is_empty() {
        return Err("empty identifier_id".into());
    }

    if rec.time.trim().is_empty() {
        rec.time = format_clock_12h(&rec.timestamp.time());
    } else {
        rec.time = rec.time.trim().to_string();
        parse_clock_12h(&rec.time)?;
    }

    Ok(())
}
