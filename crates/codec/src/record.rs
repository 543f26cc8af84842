//! Cursor ⇄ record-sequence codec
//!
//! Export pulls a cursor row by row and writes each row as one flat mapping.
//! Import reads the mappings back into a [`Table`], discovering columns in
//! the order their keys are first seen, and hands the table out as a cursor.
//!
//! ## Null handling
//!
//! | Cell | `include_nulls = false` | `include_nulls = true` |
//! |------|-------------------------|------------------------|
//! | Null | key omitted | `key: null` |
//! | Empty | `key: ''` | `key: ''` |
//! | Present | `key: <value>` | `key: <value>` |
//!
//! On import an omitted key, `~`, `null` and an empty plain value all read
//! back as null; `''` reads back as the empty string.

use std::collections::{HashMap, HashSet};
use std::io::Write;
use std::sync::Arc;

use tabyaml_core::{Cell, ColumnType, Cursor, Row, Table, TableCursor, Value};
use tracing::{debug, trace};

use crate::emit::YamlWriter;
use crate::error::{DecodeError, EncodeError, Error, Result};
use crate::events::{EventReader, Located, Token};
use crate::registry::ScalarRegistry;
use crate::scalar::{Scalar, NON_SPECIFIC_TAG, STR_TAG};

/// Encodes cursors as record sequences and decodes them back into tables
#[derive(Debug, Clone)]
pub struct TabularRecordCodec {
    registry: Arc<ScalarRegistry>,
    include_nulls: bool,
}

impl TabularRecordCodec {
    /// Create a codec over a shared scalar registry
    pub fn new(registry: Arc<ScalarRegistry>, include_nulls: bool) -> Self {
        Self {
            registry,
            include_nulls,
        }
    }

    /// Whether null fields are written as `key: null`
    pub fn include_nulls(&self) -> bool {
        self.include_nulls
    }

    /// The scalar registry in use
    pub fn registry(&self) -> &ScalarRegistry {
        &self.registry
    }

    /// Write every remaining row of `cursor` to `out`
    ///
    /// The cursor is left exhausted. Returns the number of records written.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::UnsupportedType`] if no codec handles a field's type
    /// - [`EncodeError::TypeMismatch`] if a value disagrees with its declared type
    /// - [`EncodeError::Cursor`] / [`EncodeError::Io`] from the source or sink
    pub fn encode<C, W>(&self, cursor: &mut C, out: W) -> std::result::Result<usize, EncodeError>
    where
        C: Cursor + ?Sized,
        W: Write,
    {
        let mut writer = YamlWriter::new(out);
        let field_count = cursor.field_count();

        while cursor.advance()? {
            writer.begin_record();
            for ordinal in 0..field_count {
                let name = cursor.field_name(ordinal)?;
                let scalar = match cursor.cell(ordinal)? {
                    Cell::Null if !self.include_nulls => continue,
                    Cell::Null => Scalar::null(),
                    Cell::Empty => {
                        let column_type = cursor.field_type(ordinal)?;
                        self.encode_value(name, column_type, &Value::String(String::new()))?
                    }
                    Cell::Present(value) => {
                        let column_type = cursor.field_type(ordinal)?;
                        self.encode_value(name, column_type, &value)?
                    }
                };
                writer.entry(name, &scalar)?;
            }
            writer.end_record()?;
        }

        let records = writer.finish()?;
        debug!(
            target: "tabyaml::encode",
            records,
            columns = field_count,
            include_nulls = self.include_nulls,
            "Encoded cursor"
        );
        Ok(records)
    }

    /// Encode `cursor` into a string
    ///
    /// The writer emits only `&str` fragments, so the buffer is always UTF-8.
    ///
    /// # Errors
    ///
    /// As [`encode`](Self::encode).
    pub fn encode_to_string<C>(&self, cursor: &mut C) -> std::result::Result<String, EncodeError>
    where
        C: Cursor + ?Sized,
    {
        let mut buf = Vec::new();
        self.encode(cursor, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn encode_value(
        &self,
        column: &str,
        column_type: ColumnType,
        value: &Value,
    ) -> std::result::Result<Scalar, EncodeError> {
        let kind = match (column_type.kind(), value.kind()) {
            (Some(declared), Some(actual)) if declared != actual => {
                return Err(EncodeError::TypeMismatch {
                    column: column.to_string(),
                    declared: column_type,
                    actual: value.type_name(),
                });
            }
            (Some(declared), _) => declared,
            (None, Some(actual)) => actual,
            (None, None) => return Ok(Scalar::null()),
        };
        let codec = self
            .registry
            .codec(kind)
            .ok_or_else(|| EncodeError::UnsupportedType {
                column: column.to_string(),
                column_type: if column_type == ColumnType::Any {
                    kind.into()
                } else {
                    column_type
                },
            })?;
        codec.encode(value)
    }

    /// Decode a document into a cursor over a new table
    ///
    /// Returns `Ok(None)` for a document with no content (empty, blank,
    /// comments only) or whose root is the null scalar.
    ///
    /// # Errors
    ///
    /// - [`Error::Parse`] for malformed YAML, a root other than a sequence of
    ///   flat mappings, or content after the first document
    /// - [`Error::Decode`] for a scalar no codec accepts
    pub fn decode_str(&self, text: &str) -> Result<Option<TableCursor>> {
        let mut reader = EventReader::new(text);

        let root = reader.next_content()?;
        match &root.token {
            Token::StreamEnd => {
                debug!(target: "tabyaml::decode", "Empty document");
                return Ok(None);
            }
            Token::Scalar { scalar, .. } if scalar.is_null_literal() => {
                reader.expect_end()?;
                debug!(target: "tabyaml::decode", "Null document");
                return Ok(None);
            }
            Token::SequenceStart => {}
            _ => return Err(root.unexpected("a sequence of records").into()),
        }

        let mut table = Table::new();
        let mut anchors: HashMap<usize, Value> = HashMap::new();
        loop {
            let located = reader.next_content()?;
            match located.token {
                Token::MappingStart => {
                    let row = self.decode_record(&mut reader, &mut table, &mut anchors)?;
                    table.push_row(row)?;
                }
                Token::SequenceEnd => break,
                _ => return Err(located.unexpected("a record mapping").into()),
            }
        }
        reader.expect_end()?;

        debug!(
            target: "tabyaml::decode",
            rows = table.row_count(),
            columns = table.column_count(),
            "Decoded table"
        );
        Ok(Some(table.into_cursor()))
    }

    fn decode_record(
        &self,
        reader: &mut EventReader<'_>,
        table: &mut Table,
        anchors: &mut HashMap<usize, Value>,
    ) -> Result<Row> {
        let mut row = Row::new();
        let mut seen = HashSet::new();
        loop {
            let located = reader.next_content()?;
            let key = match located.token {
                Token::MappingEnd => return Ok(row),
                Token::Scalar { scalar, .. } if is_string_key(&scalar) => scalar.text,
                Token::Scalar { .. } => return Err(located.unexpected("a string key").into()),
                _ => return Err(located.unexpected("a scalar key").into()),
            };

            let known = table.column_count();
            let column = table.ensure_column(&key);
            if column == known {
                trace!(target: "tabyaml::decode", column = %key, index = column, "Discovered column");
            }
            if !seen.insert(column) {
                debug!(target: "tabyaml::decode", column = %key, "Repeated key, keeping last value");
            }

            let value = self.decode_value(reader.next_content()?, anchors)?;
            row.set(column, value);
        }
    }

    fn decode_value(&self, located: Located, anchors: &mut HashMap<usize, Value>) -> Result<Value> {
        let Located {
            token,
            line,
            column,
        } = located;
        match token {
            Token::Scalar { scalar, anchor } => {
                let value = self
                    .registry
                    .decode(&scalar)
                    .map_err(|source| Error::Decode {
                        line,
                        column,
                        source,
                    })?;
                if anchor != 0 {
                    anchors.insert(anchor, value.clone());
                }
                Ok(value)
            }
            Token::Alias(id) => anchors.get(&id).cloned().ok_or(Error::Decode {
                line,
                column,
                source: DecodeError::UnknownAlias,
            }),
            other => Err(Located {
                token: other,
                line,
                column,
            }
            .unexpected("a scalar value")
            .into()),
        }
    }
}

/// Column names are strings: null keys and keys tagged with another kind
/// have no column to land in
fn is_string_key(scalar: &Scalar) -> bool {
    match scalar.tag.as_deref() {
        None => !scalar.is_null_literal(),
        Some(tag) => tag == STR_TAG || tag == NON_SPECIFIC_TAG,
    }
}
