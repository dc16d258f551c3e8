//! Error types for the Brigade library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Brigade operations.
#[derive(Debug, Error)]
pub enum BrigadeError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no rows to load.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// A required dataset column is absent from the header row.
    #[error("Missing column '{0}'")]
    MissingColumn(String),

    /// A row could not be turned into a menu item.
    #[error("Invalid record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Two rows share the same item ID.
    #[error("Duplicate item ID {0}")]
    DuplicateId(u32),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Brigade operations.
pub type Result<T> = std::result::Result<T, BrigadeError>;
