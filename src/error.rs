use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur while a
/// word list is loaded, cleaned, or written back out.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when a table cannot be parsed or serialised as CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Raised when a table lacks a column the variant cannot do without.
    #[error("{dataset} table is missing required column '{column}'")]
    MissingColumn { dataset: String, column: String },

    /// Raised when a column that must hold integers contains something else.
    #[error("invalid integer '{value}' in column {column} at row {row}")]
    InvalidInteger {
        column: String,
        row: usize,
        value: String,
    },

    /// Raised when the input table of a dataset does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
