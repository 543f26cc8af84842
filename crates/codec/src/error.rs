//! Error types for the YAML codecs
//!
//! - [`EncodeError`]: export failures (unsupported column type, cursor or sink failure)
//! - [`DecodeError`]: a scalar that cannot become a value (bad base64, unknown tag)
//! - [`ParseError`]: malformed YAML or an unexpected structure
//! - [`ConfigError`]: configuration file problems
//! - [`Error`]: everything an import can fail with
//!
//! All failures are fatal to the call that raised them; nothing is retried.

use std::io;

use tabyaml_core::{ColumnType, ValueKind};
use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Export failures
#[derive(Debug, Error)]
pub enum EncodeError {
    /// No scalar codec is installed for the column's type
    #[error("no scalar codec registered for type {column_type} (column '{column}')")]
    UnsupportedType {
        /// Column name
        column: String,
        /// Offending type
        column_type: ColumnType,
    },

    /// The value does not match the column's declared type
    #[error("column '{column}' is declared {declared} but holds a {actual} value")]
    TypeMismatch {
        /// Column name
        column: String,
        /// Declared type
        declared: ColumnType,
        /// Type name of the value found
        actual: &'static str,
    },

    /// A scalar codec was handed a value of another kind
    #[error("{codec} codec cannot encode a {actual} value")]
    WrongKind {
        /// Kind the codec handles
        codec: ValueKind,
        /// Type name of the value given
        actual: &'static str,
    },

    /// The cursor failed while being read
    #[error("cursor error: {0}")]
    Cursor(#[from] tabyaml_core::Error),

    /// The sink failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A scalar that cannot be turned into a value
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// Binary scalar body is not valid base64
    #[error("invalid base64 in binary scalar: {0}")]
    InvalidBase64(String),

    /// Tag with no registered mapping
    #[error("unknown tag: {tag}")]
    UnknownTag {
        /// Resolved tag
        tag: String,
    },

    /// Scalar text is not a valid lexical form for its kind
    #[error("invalid {kind} scalar: {text:?}")]
    InvalidScalar {
        /// Kind the scalar was resolved to
        kind: ValueKind,
        /// Scalar text
        text: String,
    },

    /// The scalar resolved to a kind with no installed codec
    #[error("no scalar codec registered for {kind}")]
    NoCodec {
        /// Resolved kind
        kind: ValueKind,
    },

    /// Alias to an anchor that is not a scalar seen earlier
    #[error("alias refers to an unknown or non-scalar anchor")]
    UnknownAlias,
}

/// Malformed or structurally unexpected YAML
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The scanner rejected the text
    #[error("YAML syntax error at line {line}, column {column}: {message}")]
    Syntax {
        /// Scanner message
        message: String,
        /// 1-based line
        line: usize,
        /// 1-based column
        column: usize,
    },

    /// Well-formed YAML with the wrong shape
    #[error("expected {expected} at line {line}, column {column}, found {found}")]
    Unexpected {
        /// What the record structure requires here
        expected: &'static str,
        /// What the document has instead
        found: String,
        /// 1-based line
        line: usize,
        /// 1-based column
        column: usize,
    },
}

/// Configuration loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config file '{path}': {source}")]
    Read {
        /// File path
        path: String,
        /// Underlying error
        source: io::Error,
    },

    /// The config text is not valid TOML for [`CodecConfig`](crate::CodecConfig)
    #[error("failed to parse config: {0}")]
    Parse(String),
}

/// Errors raised by an import
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed YAML or unexpected structure
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A scalar could not be decoded
    #[error("decode error at line {line}, column {column}: {source}")]
    Decode {
        /// 1-based line of the scalar
        line: usize,
        /// 1-based column of the scalar
        column: usize,
        /// Underlying decode failure
        source: DecodeError,
    },

    /// The table being built rejected a row
    #[error("table error: {0}")]
    Table(#[from] tabyaml_core::Error),

    /// Export failure
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Configuration failure
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The source could not be read
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// The decode failure, if this is one
    pub fn as_decode(&self) -> Option<&DecodeError> {
        match self {
            Error::Decode { source, .. } => Some(source),
            _ => None,
        }
    }

    /// The parse failure, if this is one
    pub fn as_parse(&self) -> Option<&ParseError> {
        match self {
            Error::Parse(e) => Some(e),
            _ => None,
        }
    }
}
