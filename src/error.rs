use thiserror::Error;

use crate::ingestion::SourceColumn;

/// Convenience result type for ingestion and lookup operations.
pub type DataResult<T> = Result<T, DataError>;

/// Error type shared across parsing, lookup, and export.
///
/// This is a single error enum shared across the three ingestion formats and the
/// in-memory model's lookup/validation operations.
#[derive(Debug, Error)]
pub enum DataError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error (export).
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A lookup (area, measure, name, year, dataset code) found nothing.
    #[error("not found: {0}")]
    NotFound(String),

    /// A language code that is not exactly three alphabetic characters.
    #[error("invalid language code '{0}': expected exactly three alphabetic characters")]
    InvalidLanguageCode(String),

    /// Structurally invalid input: bad header, short row, unparseable number,
    /// or JSON that does not match the expected record layout.
    #[error("malformed input: {0}")]
    Malformed(String),

    /// The caller-supplied column mapping lacks a required logical key.
    #[error("column mapping is missing required key '{0}'")]
    MissingColumn(SourceColumn),

    /// The column mapping size does not match what the format requires.
    #[error("expected {expected} mapped columns, found {found}")]
    ColumnCount { expected: usize, found: usize },

    /// The input source could not be used at all: unopenable file or an
    /// unrecognized format tag.
    #[error("unusable input source: {0}")]
    Source(String),
}
