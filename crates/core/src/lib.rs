//! Core types and traits for tabyaml
//!
//! This crate defines the tabular data model the codecs work against:
//! - Value: the scalar stored in a cell (null, bool, int, float, string, bytes)
//! - ValueKind / ColumnType: value kinds and advisory column types
//! - Cell: Null / Empty / Present classification of a cell
//! - Cursor: forward-only row source trait
//! - Table / Row / TableCursor: in-memory table built during import
//! - Error: error type for cursor and table access

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod table;
pub mod traits;
pub mod value;

pub use error::{Error, Result};
pub use table::{Column, Row, Table, TableCursor};
pub use traits::Cursor;
pub use value::{Cell, ColumnType, Value, ValueKind};
