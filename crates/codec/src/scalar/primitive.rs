//! Bool, int and float scalars
//!
//! All three are written plain, in the canonical core-schema form, so an
//! untagged reader resolves them back to the same kind.

use tabyaml_core::{Value, ValueKind};

use super::resolve::{format_float, parse_bool, parse_float, parse_int};
use super::{wrong_kind, Scalar, ScalarCodec, BOOL_TAG, FLOAT_TAG, INT_TAG};
use crate::error::{DecodeError, EncodeError};

fn invalid(kind: ValueKind, scalar: &Scalar) -> DecodeError {
    DecodeError::InvalidScalar {
        kind,
        text: scalar.text.clone(),
    }
}

/// Codec for [`Value::Bool`]: `true` / `false`
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolScalarCodec;

impl ScalarCodec for BoolScalarCodec {
    fn kind(&self) -> ValueKind {
        ValueKind::Bool
    }

    fn tag(&self) -> &str {
        BOOL_TAG
    }

    fn encode(&self, value: &Value) -> Result<Scalar, EncodeError> {
        match value {
            Value::Bool(b) => Ok(Scalar::plain(if *b { "true" } else { "false" })),
            other => Err(wrong_kind(ValueKind::Bool, other)),
        }
    }

    fn decode(&self, scalar: &Scalar) -> Result<Value, DecodeError> {
        parse_bool(&scalar.text)
            .map(Value::Bool)
            .ok_or_else(|| invalid(ValueKind::Bool, scalar))
    }
}

/// Codec for [`Value::Int`]: decimal, or `0x`/`0o` on input
#[derive(Debug, Clone, Copy, Default)]
pub struct IntScalarCodec;

impl ScalarCodec for IntScalarCodec {
    fn kind(&self) -> ValueKind {
        ValueKind::Int
    }

    fn tag(&self) -> &str {
        INT_TAG
    }

    fn encode(&self, value: &Value) -> Result<Scalar, EncodeError> {
        match value {
            Value::Int(i) => Ok(Scalar::plain(i.to_string())),
            other => Err(wrong_kind(ValueKind::Int, other)),
        }
    }

    fn decode(&self, scalar: &Scalar) -> Result<Value, DecodeError> {
        parse_int(&scalar.text)
            .map(Value::Int)
            .ok_or_else(|| invalid(ValueKind::Int, scalar))
    }
}

/// Codec for [`Value::Float`]
///
/// Finite values are written with a fractional part or exponent (`1.0`,
/// `1e100`); the rest as `.inf`, `-.inf`, `.nan`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatScalarCodec;

impl ScalarCodec for FloatScalarCodec {
    fn kind(&self) -> ValueKind {
        ValueKind::Float
    }

    fn tag(&self) -> &str {
        FLOAT_TAG
    }

    fn encode(&self, value: &Value) -> Result<Scalar, EncodeError> {
        match value {
            Value::Float(f) => Ok(Scalar::plain(format_float(*f))),
            other => Err(wrong_kind(ValueKind::Float, other)),
        }
    }

    fn decode(&self, scalar: &Scalar) -> Result<Value, DecodeError> {
        parse_float(&scalar.text)
            .map(Value::Float)
            .ok_or_else(|| invalid(ValueKind::Float, scalar))
    }
}
