//! Table Building Tests

use crate::common::*;
use tabyaml::{Row, TableError};

#[test]
fn columns_keep_declaration_order() {
    let t = Table::with_typed_columns([("b", ColumnType::Int), ("a", ColumnType::String)]);
    assert_eq!(t.column_names(), vec!["b", "a"]);
    assert_eq!(t.column_index("a"), Some(1));
    assert!(t.columns().iter().all(|c| c.is_declared()));
}

#[test]
fn add_column_is_idempotent() {
    let mut t = Table::new();
    assert_eq!(t.add_column("x", ColumnType::Int), 0);
    assert_eq!(t.add_column("x", ColumnType::String), 0);
    assert_eq!(t.columns()[0].column_type(), ColumnType::Int);
}

#[test]
fn sparse_rows_read_null() {
    let mut t = Table::with_columns(["a", "b", "c"]);
    let mut row = Row::new();
    row.set(2, Value::Int(9));
    t.push_row(row).unwrap();

    assert_eq!(t.get(0, 0), Some(&Value::Null));
    assert_eq!(t.get(0, 2), Some(&Value::Int(9)));
    assert_eq!(t.rows()[0].len(), 1);
}

#[test]
fn short_rows_are_padded_with_null() {
    let mut t = Table::with_columns(["a", "b"]);
    t.push_values([Value::Int(1)]).unwrap();
    assert_eq!(t.get(0, 1), Some(&Value::Null));
}

#[test]
fn wide_rows_are_rejected() {
    let mut t = Table::with_columns(["a"]);
    assert_eq!(
        t.push_values([Value::Int(1), Value::Int(2)]),
        Err(TableError::RowTooWide {
            expected: 1,
            actual: 2
        })
    );
}

#[test]
fn from_cursor_copies_decoded_table() {
    let mut cursor = tabyaml::decode("- a: 1\n- b: x\n").unwrap().unwrap();
    let copy = Table::from_cursor(&mut cursor).unwrap();
    assert_eq!(copy.column_names(), vec!["a", "b"]);
    assert_eq!(copy.row_count(), 2);
    assert_eq!(copy.get(1, 1), Some(&Value::from("x")));
}
