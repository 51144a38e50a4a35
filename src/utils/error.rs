//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while loading and preparing the dataset
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Data source unavailable: {0}")]
    DataUnavailable(String),

    #[error("Missing required column: {0}")]
    SchemaError(String),

    #[error("Invalid value '{value}' in column '{column}' at line {line}")]
    InvalidValue {
        line: u64,
        column: String,
        value: String,
    },

    #[error("Row at line {line} has {found} cells, expected {expected}")]
    RowLength {
        line: u64,
        found: usize,
        expected: usize,
    },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

impl From<reqwest::Error> for DataError {
    fn from(err: reqwest::Error) -> Self {
        DataError::DataUnavailable(err.to_string())
    }
}

/// Errors that can occur during chart rendering
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Empty series: {0}")]
    EmptySeries(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
