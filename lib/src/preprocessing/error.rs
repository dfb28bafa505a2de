//! Error types for preprocessing operations.

use crate::dataset::ColumnKind;
use thiserror::Error;

/// Result type alias for preprocessing operations.
pub type Result<T> = std::result::Result<T, PreprocessingError>;

/// Error type for preprocessing operations.
#[derive(Debug, Error)]
pub enum PreprocessingError {
    /// A selected column is absent from the dataset schema.
    #[error("Column not found: '{0}'")]
    ColumnNotFound(String),

    /// A value lies outside the domain of the transformation.
    #[error("Invalid value {value} in column '{column}' at row {row}: {reason}")]
    InvalidValue {
        column: String,
        row: usize,
        value: f64,
        reason: String,
    },

    /// Column statistics make the transformation undefined (zero variance, zero range).
    #[error("Degenerate column '{column}': {reason}")]
    DegenerateColumn { column: String, reason: String },

    /// Invalid constructor or configuration argument.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Column holds values of a different kind than the transformation expects.
    #[error("Column '{column}' is {got}, expected {expected}")]
    ColumnTypeMismatch {
        column: String,
        expected: ColumnKind,
        got: ColumnKind,
    },

    /// A fitted encoder met a category it did not see during fit.
    #[error("Unknown category '{category}' in column '{column}' at row {row}")]
    UnknownCategory {
        column: String,
        row: usize,
        category: String,
    },

    /// Column length differs from the rest of the dataset.
    #[error("Column '{column}' has {got} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        got: usize,
    },

    /// Two columns share the same name.
    #[error("Duplicate column: '{0}'")]
    DuplicateColumn(String),

    /// CSV reading or writing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Transformation configuration could not be parsed.
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
