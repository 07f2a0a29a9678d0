//! Error types for the mood-meter library.
//!
//! This module provides custom error types using `thiserror` for better error handling
//! and more specific error messages throughout the application.

use thiserror::Error;

/// Errors that can occur in the mood-meter application.
#[derive(Error, Debug)]
pub enum MoodMeterError {
    /// CSV parsing or writing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parsing or serialization errors
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// File I/O errors
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Uploaded data could not be parsed into a table
    #[error("Could not parse input as tabular data: {0}")]
    Parse(String),

    /// The selected text column does not exist in the table
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// The input file format is not supported
    #[error("Unsupported input format: {0}. Supported formats: csv, json")]
    UnsupportedFormat(String),

    /// An underlying sentiment scorer failed
    #[error("Scorer '{scorer}' failed: {message}")]
    Scorer {
        /// Name of the failing scorer
        scorer: String,
        /// What went wrong
        message: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// General error with context
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Result with `MoodMeterError`
pub type Result<T> = std::result::Result<T, MoodMeterError>;

impl From<anyhow::Error> for MoodMeterError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}
