//! Shared test utilities for all integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::sync::Once;

pub use tabyaml::{
    Cell, CodecFactory, ColumnType, Cursor, Decoder, Encoder, Table, TableCursor, Value,
    ValueKind,
};

// ============================================================================
// Initialization
// ============================================================================

static INIT_TRACING: Once = Once::new();

/// Route `tabyaml::*` logs to the test harness (shown with `--nocapture`).
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("tabyaml=trace")
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Fixtures
// ============================================================================

/// Encoder/decoder pair from one factory.
pub fn codecs(include_nulls: bool) -> (Encoder, Decoder) {
    init_tracing();
    let factory = CodecFactory::new().include_nulls(include_nulls);
    (factory.encoder(), factory.decoder())
}

/// Encode a table (through its cursor) to text.
pub fn encode_table(table: &Table, include_nulls: bool) -> String {
    let (encoder, _) = codecs(include_nulls);
    encoder
        .encode_to_string(&mut table.clone().into_cursor())
        .expect("encode")
}

/// Decode text that must contain a sequence.
pub fn decode_table(text: &str) -> Table {
    let (_, decoder) = codecs(false);
    decoder
        .decode(text)
        .expect("decode")
        .expect("document has content")
        .into_table()
}

/// Encode then decode.
pub fn round_trip(table: &Table, include_nulls: bool) -> Table {
    decode_table(&encode_table(table, include_nulls))
}

/// Table from column names and positional rows.
pub fn table<const N: usize>(columns: [&str; N], rows: Vec<[Value; N]>) -> Table {
    let mut table = Table::with_columns(columns);
    for row in rows {
        table.push_values(row).expect("row fits");
    }
    table
}

/// One row of every value kind, plus null and empty string.
pub fn mixed_table() -> Table {
    table(
        ["id", "name", "score", "active", "photo", "note", "missing"],
        vec![
            [
                Value::Int(1),
                Value::from("ada"),
                Value::Float(9.5),
                Value::Bool(true),
                Value::Bytes(vec![0, 1, 2, 255]),
                Value::from("line one\nline two"),
                Value::Null,
            ],
            [
                Value::Int(2),
                Value::from(""),
                Value::Float(-0.25),
                Value::Bool(false),
                Value::Bytes(vec![]),
                Value::from("null"),
                Value::Null,
            ],
        ],
    )
}
