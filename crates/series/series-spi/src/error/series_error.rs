//! Series error types

use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors raised while building, loading or extending a time series table
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    /// Rows are not strictly ascending by timestamp
    #[error("Row {index} at {current} does not follow {previous}")]
    UnorderedTimestamps {
        index: usize,
        previous: NaiveDateTime,
        current: NaiveDateTime,
    },

    /// Row does not carry one value per field
    #[error("Row {index} has {actual} values, expected {expected}")]
    RowWidth {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// Source file could not be opened
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Malformed CSV input
    #[error("Failed to parse CSV: {0}")]
    Csv(String),

    /// Required column is absent from the header
    #[error("Column '{0}' not found")]
    MissingColumn(String),

    /// Timestamp cell could not be parsed
    #[error("Invalid timestamp '{value}' on line {line}")]
    InvalidTimestamp { line: u64, value: String },

    /// Numeric cell could not be parsed
    #[error("Invalid number '{value}' in column '{column}' on line {line}")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },

    /// Source contained a header but no data rows
    #[error("No rows found")]
    NoRows,
}
