//! Core trait for forward-only tabular sources
//!
//! This module defines the [`Cursor`] trait that lets the codecs read any
//! row source uniformly: a relational driver's result reader, an in-memory
//! [`TableCursor`](crate::table::TableCursor), or a test fixture.

use crate::error::{Error, Result};
use crate::value::{Cell, ColumnType, Value};

/// Forward-only, read-once view over tabular rows
///
/// A fresh cursor is positioned *before* the first row. Each call to
/// [`advance`](Cursor::advance) moves to the next row and reports whether one
/// exists; once it returns `false` the cursor is exhausted and stays so.
/// There is no rewind.
///
/// Field accessors address the current row by ordinal. Reading a field while
/// not positioned on a row fails with [`Error::NoCurrentRow`]; an ordinal
/// past [`field_count`](Cursor::field_count) fails with
/// [`Error::OrdinalOutOfRange`].
///
/// # Examples
///
/// ```
/// use tabyaml_core::{Cursor, Table, Value};
///
/// let mut table = Table::with_columns(["id", "name"]);
/// table.push_values([Value::Int(1), Value::from("ada")]).unwrap();
///
/// let mut cursor = table.into_cursor();
/// while cursor.advance().unwrap() {
///     assert_eq!(cursor.value_by_name("name").unwrap(), Value::from("ada"));
/// }
/// ```
pub trait Cursor {
    /// Move to the next row
    ///
    /// Returns `Ok(false)` once all rows are consumed.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source fails while fetching.
    fn advance(&mut self) -> Result<bool>;

    /// Number of fields in each row
    fn field_count(&self) -> usize;

    /// Name of the field at `ordinal`
    ///
    /// # Errors
    ///
    /// Returns [`Error::OrdinalOutOfRange`] for an unknown ordinal.
    fn field_name(&self, ordinal: usize) -> Result<&str>;

    /// Declared type of the field at `ordinal`
    ///
    /// # Errors
    ///
    /// Returns [`Error::OrdinalOutOfRange`] for an unknown ordinal.
    fn field_type(&self, ordinal: usize) -> Result<ColumnType>;

    /// Whether the field at `ordinal` is null in the current row
    ///
    /// # Errors
    ///
    /// Returns an error if the cursor is not positioned on a row or the
    /// ordinal is out of range.
    fn is_null(&self, ordinal: usize) -> Result<bool>;

    /// Value of the field at `ordinal` in the current row
    ///
    /// # Errors
    ///
    /// Returns an error if the cursor is not positioned on a row or the
    /// ordinal is out of range.
    fn value(&self, ordinal: usize) -> Result<Value>;

    /// Ordinal of the field called `name`, if any
    fn ordinal(&self, name: &str) -> Option<usize> {
        (0..self.field_count()).find(|&i| self.field_name(i).map_or(false, |n| n == name))
    }

    /// Value of the field called `name` in the current row
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownColumn`] if no field has that name.
    fn value_by_name(&self, name: &str) -> Result<Value> {
        let ordinal = self.ordinal(name).ok_or_else(|| Error::UnknownColumn {
            name: name.to_string(),
        })?;
        self.value(ordinal)
    }

    /// Three-way classification of the field at `ordinal`
    ///
    /// # Errors
    ///
    /// Same as [`value`](Cursor::value).
    fn cell(&self, ordinal: usize) -> Result<Cell> {
        if self.is_null(ordinal)? {
            return Ok(Cell::Null);
        }
        Ok(Cell::from(self.value(ordinal)?))
    }

    /// Names of all fields, in ordinal order
    ///
    /// # Errors
    ///
    /// Propagates errors from [`field_name`](Cursor::field_name).
    fn field_names(&self) -> Result<Vec<String>> {
        (0..self.field_count())
            .map(|i| self.field_name(i).map(str::to_string))
            .collect()
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    fn advance(&mut self) -> Result<bool> {
        (**self).advance()
    }

    fn field_count(&self) -> usize {
        (**self).field_count()
    }

    fn field_name(&self, ordinal: usize) -> Result<&str> {
        (**self).field_name(ordinal)
    }

    fn field_type(&self, ordinal: usize) -> Result<ColumnType> {
        (**self).field_type(ordinal)
    }

    fn is_null(&self, ordinal: usize) -> Result<bool> {
        (**self).is_null(ordinal)
    }

    fn value(&self, ordinal: usize) -> Result<Value> {
        (**self).value(ordinal)
    }

    fn ordinal(&self, name: &str) -> Option<usize> {
        (**self).ordinal(name)
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    fn advance(&mut self) -> Result<bool> {
        (**self).advance()
    }

    fn field_count(&self) -> usize {
        (**self).field_count()
    }

    fn field_name(&self, ordinal: usize) -> Result<&str> {
        (**self).field_name(ordinal)
    }

    fn field_type(&self, ordinal: usize) -> Result<ColumnType> {
        (**self).field_type(ordinal)
    }

    fn is_null(&self, ordinal: usize) -> Result<bool> {
        (**self).is_null(ordinal)
    }

    fn value(&self, ordinal: usize) -> Result<Value> {
        (**self).value(ordinal)
    }

    fn ordinal(&self, name: &str) -> Option<usize> {
        (**self).ordinal(name)
    }
}
