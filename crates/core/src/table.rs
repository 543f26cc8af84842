//! In-memory table with dynamically discovered columns
//!
//! A [`Table`] is what an import produces: an ordered set of columns
//! (first-seen order) and rows stored sparsely, column index → value. A
//! column missing from a row is null for that row; null is never stored.
//!
//! Once populated, a table is handed out as a [`TableCursor`].

use std::collections::{BTreeMap, HashMap};

use crate::error::{Error, Result};
use crate::traits::Cursor;
use crate::value::{Cell, ColumnType, Value};

static NULL: Value = Value::Null;

/// Column metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    column_type: ColumnType,
    declared: bool,
    seen: bool,
}

impl Column {
    fn declared(name: String, column_type: ColumnType) -> Self {
        Self {
            name,
            column_type,
            declared: true,
            seen: false,
        }
    }

    fn discovered(name: String) -> Self {
        Self {
            name,
            column_type: ColumnType::Any,
            declared: false,
            seen: false,
        }
    }

    /// Column name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Advisory column type
    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    /// Whether the type was declared up front rather than discovered
    pub fn is_declared(&self) -> bool {
        self.declared
    }

    // Discovered columns take the kind of their first non-null value and
    // widen to Any on the first disagreement.
    fn observe(&mut self, value: &Value) {
        if self.declared {
            return;
        }
        let Some(kind) = value.kind() else {
            return;
        };
        if !self.seen {
            self.column_type = kind.into();
            self.seen = true;
        } else if self.column_type != ColumnType::from(kind) {
            self.column_type = ColumnType::Any;
        }
    }
}

/// One row: a sparse mapping from column index to value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: BTreeMap<usize, Value>,
}

impl Row {
    /// Create an empty row (every column null)
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` at `column`; storing `Null` clears the position
    pub fn set(&mut self, column: usize, value: Value) {
        if value.is_null() {
            self.cells.remove(&column);
        } else {
            self.cells.insert(column, value);
        }
    }

    /// Value at `column`, `None` when null or absent
    pub fn get(&self, column: usize) -> Option<&Value> {
        self.cells.get(&column)
    }

    /// Three-way classification of `column`
    pub fn cell(&self, column: usize) -> Cell {
        self.get(column).cloned().map_or(Cell::Null, Cell::from)
    }

    /// Number of non-null values
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when every column is null
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Non-null values in column order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Value)> {
        self.cells.iter().map(|(i, v)| (*i, v))
    }

    fn max_column(&self) -> Option<usize> {
        self.cells.keys().next_back().copied()
    }
}

/// Owned in-memory table
///
/// Equality compares column names (in order) and rows; column types are
/// advisory and do not take part.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<Column>,
    index: HashMap<String, usize>,
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table with no columns
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with untyped (`Any`) columns
    pub fn with_columns<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for name in names {
            table.add_column(name, ColumnType::Any);
        }
        table
    }

    /// Create a table with declared column types
    pub fn with_typed_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = (S, ColumnType)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (name, column_type) in columns {
            table.add_column(name, column_type);
        }
        table
    }

    /// Declare a column, returning its index
    ///
    /// If the name already exists the existing index is returned and the
    /// column is left unchanged.
    pub fn add_column(&mut self, name: impl Into<String>, column_type: ColumnType) -> usize {
        let name = name.into();
        if let Some(&idx) = self.index.get(&name) {
            return idx;
        }
        self.push_column(Column::declared(name, column_type))
    }

    /// Index of the column called `name`, appending a discovered column if
    /// the name is new
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        self.push_column(Column::discovered(name.to_string()))
    }

    fn push_column(&mut self, column: Column) -> usize {
        let idx = self.columns.len();
        self.index.insert(column.name.clone(), idx);
        self.columns.push(column);
        idx
    }

    /// Index of the column called `name`
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Columns in first-seen order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in first-seen order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Rows in insertion order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row
    ///
    /// # Errors
    ///
    /// Returns [`Error::RowTooWide`] if the row references a column index the
    /// table does not have.
    pub fn push_row(&mut self, row: Row) -> Result<()> {
        if let Some(max) = row.max_column() {
            if max >= self.columns.len() {
                return Err(Error::RowTooWide {
                    expected: self.columns.len(),
                    actual: max + 1,
                });
            }
        }
        for (idx, value) in row.iter() {
            self.columns[idx].observe(value);
        }
        self.rows.push(row);
        Ok(())
    }

    /// Append a row given positionally; missing trailing values are null
    ///
    /// # Errors
    ///
    /// Returns [`Error::RowTooWide`] if more values than columns are given.
    pub fn push_values<I, V>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        if values.len() > self.columns.len() {
            return Err(Error::RowTooWide {
                expected: self.columns.len(),
                actual: values.len(),
            });
        }
        let mut row = Row::new();
        for (idx, value) in values.into_iter().enumerate() {
            row.set(idx, value);
        }
        self.push_row(row)
    }

    /// Value at (`row`, `column`); `Null` for an absent cell, `None` when
    /// either index is out of bounds
    pub fn get(&self, row: usize, column: usize) -> Option<&Value> {
        if column >= self.columns.len() {
            return None;
        }
        let row = self.rows.get(row)?;
        Some(row.get(column).unwrap_or(&NULL))
    }

    /// Value at (`row`, column called `name`)
    pub fn get_by_name(&self, row: usize, name: &str) -> Option<&Value> {
        self.get(row, self.column_index(name)?)
    }

    /// Wrap the table in a cursor positioned before the first row
    pub fn into_cursor(self) -> TableCursor {
        TableCursor::new(self)
    }

    /// Drain a cursor into a new table
    ///
    /// Columns are declared from the cursor's field names and types. A field
    /// name that repeats maps onto the first column of that name.
    ///
    /// # Errors
    ///
    /// Propagates any error the cursor reports.
    pub fn from_cursor<C: Cursor + ?Sized>(cursor: &mut C) -> Result<Table> {
        let mut table = Table::new();
        let mut targets = Vec::with_capacity(cursor.field_count());
        for ordinal in 0..cursor.field_count() {
            let name = cursor.field_name(ordinal)?.to_string();
            let column_type = cursor.field_type(ordinal)?;
            targets.push(table.add_column(name, column_type));
        }
        while cursor.advance()? {
            let mut row = Row::new();
            for (ordinal, &target) in targets.iter().enumerate() {
                if !cursor.is_null(ordinal)? {
                    row.set(target, cursor.value(ordinal)?);
                }
            }
            table.push_row(row)?;
        }
        Ok(table)
    }
}

impl PartialEq for Table {
    fn eq(&self, other: &Self) -> bool {
        self.columns.len() == other.columns.len()
            && self
                .columns
                .iter()
                .zip(&other.columns)
                .all(|(a, b)| a.name == b.name)
            && self.rows == other.rows
    }
}

/// Cursor over an owned [`Table`]
#[derive(Debug, Clone)]
pub struct TableCursor {
    table: Table,
    position: Option<usize>,
}

impl TableCursor {
    /// Wrap a table; the cursor starts before the first row
    pub fn new(table: Table) -> Self {
        Self {
            table,
            position: None,
        }
    }

    /// The underlying table
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Unwrap the underlying table
    pub fn into_table(self) -> Table {
        self.table
    }

    fn current(&self) -> Result<&Row> {
        self.position
            .and_then(|p| self.table.rows.get(p))
            .ok_or(Error::NoCurrentRow)
    }

    fn check_ordinal(&self, ordinal: usize) -> Result<()> {
        if ordinal < self.table.columns.len() {
            Ok(())
        } else {
            Err(Error::OrdinalOutOfRange {
                ordinal,
                count: self.table.columns.len(),
            })
        }
    }
}

impl Cursor for TableCursor {
    fn advance(&mut self) -> Result<bool> {
        let len = self.table.rows.len();
        let next = self.position.map_or(0, |p| p.saturating_add(1)).min(len);
        self.position = Some(next);
        Ok(next < len)
    }

    fn field_count(&self) -> usize {
        self.table.columns.len()
    }

    fn field_name(&self, ordinal: usize) -> Result<&str> {
        self.check_ordinal(ordinal)?;
        Ok(self.table.columns[ordinal].name())
    }

    fn field_type(&self, ordinal: usize) -> Result<ColumnType> {
        self.check_ordinal(ordinal)?;
        Ok(self.table.columns[ordinal].column_type())
    }

    fn is_null(&self, ordinal: usize) -> Result<bool> {
        self.check_ordinal(ordinal)?;
        Ok(self.current()?.get(ordinal).is_none())
    }

    fn value(&self, ordinal: usize) -> Result<Value> {
        self.check_ordinal(ordinal)?;
        Ok(self.current()?.get(ordinal).cloned().unwrap_or(Value::Null))
    }

    fn ordinal(&self, name: &str) -> Option<usize> {
        self.table.column_index(name)
    }
}
