//! tabyaml - round-trip tabular cursors through YAML
//!
//! Exports any [`Cursor`] as a human-readable YAML sequence of records and
//! rebuilds an equivalent in-memory [`Table`] from such a document.
//!
//! # Quick Start
//!
//! ```
//! use tabyaml::{Cursor, Table, Value};
//!
//! let mut table = Table::with_columns(["c1", "c2"]);
//! table.push_values([Value::from("a"), Value::Null]).unwrap();
//!
//! // Null fields are omitted by default
//! let text = tabyaml::encode(&mut table.into_cursor(), false).unwrap();
//! assert_eq!(text, "- c1: a\n");
//!
//! let mut cursor = tabyaml::decode(&text).unwrap().unwrap();
//! assert!(cursor.advance().unwrap());
//! assert_eq!(cursor.value_by_name("c1").unwrap(), Value::from("a"));
//! ```
//!
//! # Architecture
//!
//! - `tabyaml-core`: the tabular model ([`Value`], [`Cursor`], [`Table`])
//! - `tabyaml-codec`: scalar codecs, the record codec and [`CodecFactory`]
//!
//! For anything beyond the defaults (custom scalar codecs, restricted kinds,
//! config files) build a [`CodecFactory`] directly.

pub use tabyaml_codec::*;
pub use tabyaml_core::{
    Cell, Column, ColumnType, Cursor, Row, Table, TableCursor, Value, ValueKind,
};

/// Errors from the tabular model
pub use tabyaml_core::Error as TableError;

/// Encode every remaining row of `cursor` with the default codecs
///
/// # Errors
///
/// See [`TabularRecordCodec::encode`].
pub fn encode<C>(cursor: &mut C, include_nulls: bool) -> std::result::Result<String, EncodeError>
where
    C: Cursor + ?Sized,
{
    CodecFactory::new()
        .include_nulls(include_nulls)
        .encoder()
        .encode_to_string(cursor)
}

/// Decode a document with the default codecs
///
/// Returns `Ok(None)` for an empty document.
///
/// # Errors
///
/// See [`TabularRecordCodec::decode_str`].
pub fn decode(text: &str) -> Result<Option<TableCursor>> {
    CodecFactory::new().decoder().decode(text)
}
