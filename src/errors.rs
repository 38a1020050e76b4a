//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    // ---------------------------
    // Range / record errors
    // ---------------------------
    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    #[error("Malformed check-in record {record}: {reason}")]
    MalformedRecord { record: String, reason: String },

    // ---------------------------
    // Ingestion parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Import error: {0}")]
    Import(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
