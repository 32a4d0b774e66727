//! Ingestion error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while decoding a disaster table.
///
/// Row numbers count data rows from 1; the header row is not counted.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {row}: missing column '{column}'")]
    MissingColumn { row: usize, column: &'static str },

    #[error("Row {row}: invalid date '{value}' (expected dd/mm/YYYY)")]
    InvalidDate { row: usize, value: String },

    #[error("Row {row}: invalid time '{value}' (expected HH:MM)")]
    InvalidTime { row: usize, value: String },

    #[error("Row {row}: invalid {column} count '{value}'")]
    InvalidCount {
        row: usize,
        column: &'static str,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
