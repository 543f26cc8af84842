//! Value types for tabyaml
//!
//! This module defines:
//! - Value: the scalar carried by one cell of a row
//! - ValueKind: the kind of a non-null value
//! - ColumnType: the declared (advisory) type of a column
//! - Cell: the three-way Null / Empty / Present classification of a cell
//!
//! ## Type Rules
//!
//! - No implicit type coercions: a value keeps the kind it was built or decoded as
//! - `Int(1) != Float(1.0)`, different kinds are NEVER equal
//! - `Bytes` are not `String`
//! - `Null` is not the empty string, in either direction
//! - Float uses IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar value of a single cell
///
/// Rows hold one `Value` per column. A relational source maps its column
/// types onto these six variants; YAML documents decode into them.
///
/// ## Type Equality
///
/// Different kinds are NEVER equal, even if they contain the same "value":
/// - `Int(1) != Float(1.0)`
/// - `Bytes(b"hello") != String("hello")`
/// - `Null != String("")`
#[derive(Debug, Clone)]
pub enum Value {
    /// Null value (database NULL)
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point (IEEE-754)
    Float(f64),
    /// UTF-8 string, possibly empty
    String(String),
    /// Raw bytes
    Bytes(Vec<u8>),
}

// Custom PartialEq implementation for IEEE-754 float semantics
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            // IEEE-754: NaN != NaN, -0.0 == 0.0
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
            Value::Bytes(_) => "Bytes",
        }
    }

    /// Kind of this value, `None` for `Null`
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Value::Null => None,
            Value::Bool(_) => Some(ValueKind::Bool),
            Value::Int(_) => Some(ValueKind::Int),
            Value::Float(_) => Some(ValueKind::Float),
            Value::String(_) => Some(ValueKind::String),
            Value::Bytes(_) => Some(ValueKind::Bytes),
        }
    }

    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this is the empty string (and not null)
    pub fn is_empty_string(&self) -> bool {
        matches!(self, Value::String(s) if s.is_empty())
    }

    /// Get as bool if this is a Bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i64 if this is an Int value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64 if this is a Float value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as &str if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as &[u8] if this is a Bytes value
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(b.to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

// ============================================================================
// ValueKind / ColumnType
// ============================================================================

/// Kind of a non-null value
///
/// Scalar codecs are registered per kind; the serialized names are the ones
/// accepted in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Boolean
    Bool,
    /// 64-bit signed integer
    Int,
    /// 64-bit float
    Float,
    /// UTF-8 string
    String,
    /// Byte sequence
    Bytes,
}

impl ValueKind {
    /// All kinds, in registration order
    pub const ALL: [ValueKind; 5] = [
        ValueKind::Bool,
        ValueKind::Int,
        ValueKind::Float,
        ValueKind::String,
        ValueKind::Bytes,
    ];

    /// Lowercase name, as used in configuration
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Bytes => "bytes",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Declared type of a column
///
/// Advisory metadata only. `Any` means "dispatch on whatever kind the value
/// actually has"; a concrete type asks encoders to treat the column as that
/// kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColumnType {
    /// No declared type
    #[default]
    Any,
    /// Boolean column
    Bool,
    /// Integer column
    Int,
    /// Float column
    Float,
    /// Text column
    String,
    /// Binary column
    Bytes,
}

impl ColumnType {
    /// The value kind this column is declared as, `None` for `Any`
    pub fn kind(self) -> Option<ValueKind> {
        match self {
            ColumnType::Any => None,
            ColumnType::Bool => Some(ValueKind::Bool),
            ColumnType::Int => Some(ValueKind::Int),
            ColumnType::Float => Some(ValueKind::Float),
            ColumnType::String => Some(ValueKind::String),
            ColumnType::Bytes => Some(ValueKind::Bytes),
        }
    }

    /// Check whether a value may be stored under this declared type
    ///
    /// Null is accepted by every column.
    pub fn admits(self, value: &Value) -> bool {
        match (self.kind(), value.kind()) {
            (None, _) | (_, None) => true,
            (Some(declared), Some(actual)) => declared == actual,
        }
    }
}

impl From<ValueKind> for ColumnType {
    fn from(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Bool => ColumnType::Bool,
            ValueKind::Int => ColumnType::Int,
            ValueKind::Float => ColumnType::Float,
            ValueKind::String => ColumnType::String,
            ValueKind::Bytes => ColumnType::Bytes,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            Some(kind) => f.write_str(kind.name()),
            None => f.write_str("any"),
        }
    }
}

// ============================================================================
// Cell
// ============================================================================

/// Three-way classification of a cell
///
/// Null, the empty string and every other value are handled by separate
/// match arms wherever a cell crosses the tabular/text boundary, so the first
/// two can never be folded into each other.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// NULL
    Null,
    /// The empty string
    Empty,
    /// Any other value
    Present(Value),
}

impl Cell {
    /// Convert back into a plain value
    pub fn into_value(self) -> Value {
        match self {
            Cell::Null => Value::Null,
            Cell::Empty => Value::String(String::new()),
            Cell::Present(v) => v,
        }
    }

    /// Check if this cell is null
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }
}

impl From<Value> for Cell {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Cell::Null,
            Value::String(s) if s.is_empty() => Cell::Empty,
            other => Cell::Present(other),
        }
    }
}
