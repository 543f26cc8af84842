//! Schema Discovery Tests
//!
//! Columns are created the first time any record supplies their key, in
//! first-seen order across the whole document.

use crate::common::*;

#[test]
fn columns_in_first_seen_order() {
    let t = decode_table("- a: 1\n  b: 2\n- b: 3\n  c: 4\n");
    assert_eq!(t.column_names(), vec!["a", "b", "c"]);
    assert_eq!(t.get_by_name(0, "c"), Some(&Value::Null));
    assert_eq!(t.get_by_name(1, "a"), Some(&Value::Null));
    assert_eq!(t.get_by_name(1, "b"), Some(&Value::Int(3)));
}

#[test]
fn key_order_within_records_may_vary() {
    let t = decode_table("- b: 1\n  a: 2\n- a: 3\n  b: 4\n");
    assert_eq!(t.column_names(), vec!["b", "a"]);
    assert_eq!(t.get_by_name(1, "a"), Some(&Value::Int(3)));
    assert_eq!(t.get_by_name(1, "b"), Some(&Value::Int(4)));
}

#[test]
fn flow_style_input_is_accepted() {
    let t = decode_table("[{a: 1, b: x}, {c: true}, {}]\n");
    assert_eq!(t.column_names(), vec!["a", "b", "c"]);
    assert_eq!(t.row_count(), 3);
    assert_eq!(t.get_by_name(1, "c"), Some(&Value::Bool(true)));
}

#[test]
fn discovered_types_narrow_and_widen() {
    let t = decode_table("- n: 1\n  s: x\n  m: 1\n- n: 2\n  m: two\n");
    let types: Vec<ColumnType> = t.columns().iter().map(|c| c.column_type()).collect();
    assert_eq!(types, vec![ColumnType::Int, ColumnType::String, ColumnType::Any]);
    assert!(t.columns().iter().all(|c| !c.is_declared()));
}

#[test]
fn discovered_types_drive_re_export() {
    let t = decode_table("- blob: !!binary AAEC\n");
    assert_eq!(t.columns()[0].column_type(), ColumnType::Bytes);
    assert_eq!(encode_table(&t, false), "- blob: !!binary AAEC\n");
}

#[test]
fn mixed_kinds_in_one_column_re_export() {
    let t = decode_table("- v: 1\n- v: x\n- v: !!binary AA==\n");
    assert_eq!(t.columns()[0].column_type(), ColumnType::Any);
    assert_eq!(encode_table(&t, false), "- v: 1\n- v: x\n- v: !!binary AA==\n");
}

#[test]
fn repeated_key_keeps_last_value() {
    let t = decode_table("- a: 1\n  b: 2\n  a: 3\n");
    assert_eq!(t.column_names(), vec!["a", "b"]);
    assert_eq!(t.get(0, 0), Some(&Value::Int(3)));
}

#[test]
fn aliases_resolve_across_records() {
    let t = decode_table("- a: &shared hello\n- b: *shared\n");
    assert_eq!(t.get_by_name(1, "b"), Some(&Value::from("hello")));
}

#[test]
fn field_types_are_reported_by_cursor() {
    let mut cursor = tabyaml::decode("- i: 1\n  f: 1.5\n  t: x\n")
        .unwrap()
        .unwrap();
    assert_eq!(cursor.field_count(), 3);
    assert_eq!(cursor.field_name(1).unwrap(), "f");
    assert_eq!(cursor.field_type(0).unwrap(), ColumnType::Int);
    assert_eq!(cursor.field_type(1).unwrap(), ColumnType::Float);
    assert_eq!(cursor.field_type(2).unwrap(), ColumnType::String);
    assert_eq!(cursor.ordinal("t"), Some(2));
    assert!(cursor.advance().unwrap());
    assert!(!cursor.advance().unwrap());
}
