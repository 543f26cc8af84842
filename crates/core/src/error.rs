//! Error types for the tabular data model
//!
//! Cursor and table accessors fail with [`Error`]. We use `thiserror` for
//! automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for data model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by cursors and tables
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A field was read before the first `advance()` or after exhaustion
    #[error("no current row: cursor is not positioned on a row")]
    NoCurrentRow,

    /// Field ordinal past the end of the row
    #[error("field ordinal {ordinal} out of range (field count {count})")]
    OrdinalOutOfRange {
        /// Requested ordinal
        ordinal: usize,
        /// Number of fields
        count: usize,
    },

    /// Lookup by a column name the cursor does not have
    #[error("unknown column: {name}")]
    UnknownColumn {
        /// Requested name
        name: String,
    },

    /// A row supplied more values than the table has columns
    #[error("row has {actual} values but the table has {expected} columns")]
    RowTooWide {
        /// Number of columns
        expected: usize,
        /// Number of supplied values
        actual: usize,
    },

    /// Failure reported by an external cursor implementation
    #[error("cursor source error: {0}")]
    Source(String),
}

impl Error {
    /// Wrap an error from an external data source
    pub fn source(message: impl Into<String>) -> Self {
        Error::Source(message.into())
    }
}
