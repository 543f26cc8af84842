//! Binary scalars.
//!
//! Byte sequences have no native YAML representation, so they are written as
//! a base64 body carrying the core `binary` tag:
//!
//! | Value | YAML |
//! |-------|------|
//! | `Bytes([0, 1, 2])` | `!!binary AAEC` |
//! | `Bytes([])` | `!!binary ''` |
//!
//! Dispatch is by kind and tag only; column names play no part.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use tabyaml_core::{Value, ValueKind};

use super::{wrong_kind, Scalar, ScalarCodec, ScalarStyle, BINARY_TAG};
use crate::error::{DecodeError, EncodeError};

/// Codec for [`Value::Bytes`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryScalarCodec;

impl ScalarCodec for BinaryScalarCodec {
    fn kind(&self) -> ValueKind {
        ValueKind::Bytes
    }

    fn tag(&self) -> &str {
        BINARY_TAG
    }

    fn encode(&self, value: &Value) -> Result<Scalar, EncodeError> {
        match value {
            Value::Bytes(bytes) => Ok(encode_bytes(bytes)),
            other => Err(wrong_kind(ValueKind::Bytes, other)),
        }
    }

    fn decode(&self, scalar: &Scalar) -> Result<Value, DecodeError> {
        decode_body(&scalar.text).map(Value::Bytes)
    }
}

/// Encode bytes as a tagged base64 scalar.
///
/// The body is plain; only the empty body is quoted, so it is not read back
/// as a missing node.
pub fn encode_bytes(bytes: &[u8]) -> Scalar {
    let style = if bytes.is_empty() {
        ScalarStyle::SingleQuoted
    } else {
        ScalarStyle::Plain
    };
    Scalar::new(BASE64.encode(bytes), style).with_tag(BINARY_TAG)
}

/// Decode a base64 body.
///
/// ASCII whitespace is ignored so bodies folded across lines decode.
pub fn decode_body(text: &str) -> Result<Vec<u8>, DecodeError> {
    let compact: Vec<u8> = text
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    BASE64
        .decode(compact)
        .map_err(|e| DecodeError::InvalidBase64(e.to_string()))
}
