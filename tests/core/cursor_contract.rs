//! Cursor Contract Tests
//!
//! A cursor starts before the first row, moves forward one row per advance,
//! and stays exhausted once done.

use crate::common::*;
use tabyaml::TableError;

#[test]
fn fresh_cursor_has_no_current_row() {
    let cursor = mixed_table().into_cursor();
    assert_eq!(cursor.value(0), Err(TableError::NoCurrentRow));
    assert_eq!(cursor.field_count(), 7);
    assert_eq!(cursor.field_name(0).unwrap(), "id");
}

#[test]
fn advance_walks_every_row_once() {
    let mut cursor = mixed_table().into_cursor();
    let mut ids = Vec::new();
    while cursor.advance().unwrap() {
        ids.push(cursor.value_by_name("id").unwrap());
    }
    assert_eq!(ids, vec![Value::Int(1), Value::Int(2)]);
    assert!(!cursor.advance().unwrap());
    assert_eq!(cursor.is_null(0), Err(TableError::NoCurrentRow));
}

#[test]
fn lookup_by_unknown_name_fails() {
    let mut cursor = mixed_table().into_cursor();
    cursor.advance().unwrap();
    assert_eq!(
        cursor.value_by_name("nope"),
        Err(TableError::UnknownColumn {
            name: "nope".into()
        })
    );
}

#[test]
fn out_of_range_ordinal_fails() {
    let mut cursor = mixed_table().into_cursor();
    cursor.advance().unwrap();
    assert!(matches!(
        cursor.value(99),
        Err(TableError::OrdinalOutOfRange { ordinal: 99, .. })
    ));
}

#[test]
fn cells_classify_current_row() {
    let mut cursor = mixed_table().into_cursor();
    cursor.advance().unwrap();
    cursor.advance().unwrap();
    assert_eq!(cursor.cell(1).unwrap(), Cell::Empty);
    assert_eq!(cursor.cell(6).unwrap(), Cell::Null);
    assert_eq!(cursor.cell(0).unwrap(), Cell::Present(Value::Int(2)));
}

#[test]
fn field_names_in_order() {
    let cursor = mixed_table().into_cursor();
    assert_eq!(
        cursor.field_names().unwrap(),
        vec!["id", "name", "score", "active", "photo", "note", "missing"]
    );
}

#[test]
fn cursor_through_mutable_reference() {
    fn count_rows(cursor: &mut dyn Cursor) -> usize {
        let mut n = 0;
        while cursor.advance().unwrap() {
            n += 1;
        }
        n
    }

    let mut cursor = mixed_table().into_cursor();
    assert_eq!(count_rows(&mut cursor), 2);
    assert_eq!(count_rows(&mut cursor), 0);
}
