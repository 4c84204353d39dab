//! Error types for the dataset crate.

use thiserror::Error;

/// Errors that can occur while loading and parsing the song dataset.
///
/// Every variant is fatal for startup: the dashboard cannot serve requests
/// without a fully loaded table.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// File could not be found or opened
    #[error("Failed to open dataset file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A required column is missing from the CSV header
    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    /// A record in the file couldn't be parsed
    ///
    /// This variant stores context about where the error occurred
    #[error("Parse error at line {line}: {reason}")]
    ParseError { line: usize, reason: String },

    /// A record had fewer fields than the header declares
    #[error("Expected {expected} fields but found {found} at line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DatasetError>;
