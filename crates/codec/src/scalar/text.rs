//! String scalars and style selection
//!
//! A string must read back as the same string, never as null, a number or a
//! boolean, and never with its whitespace or line breaks altered. The writer
//! picks the most readable style that guarantees this:
//!
//! 1. `''` for the empty string (an empty plain scalar is null)
//! 2. literal block for multi-line text a block can carry verbatim
//! 3. plain when the text resolves back to a string and has no indicators
//! 4. single-quoted for other printable text
//! 5. double-quoted with escapes for everything else

use tabyaml_core::{Value, ValueKind};

use super::resolve::resolve_plain;
use super::{wrong_kind, Scalar, ScalarCodec, ScalarStyle, STR_TAG};
use crate::error::{DecodeError, EncodeError};

/// Codec for [`Value::String`]
#[derive(Debug, Clone, Copy, Default)]
pub struct StringScalarCodec;

impl ScalarCodec for StringScalarCodec {
    fn kind(&self) -> ValueKind {
        ValueKind::String
    }

    fn tag(&self) -> &str {
        STR_TAG
    }

    fn encode(&self, value: &Value) -> Result<Scalar, EncodeError> {
        match value {
            Value::String(s) => Ok(Scalar::new(s.clone(), string_style(s))),
            other => Err(wrong_kind(ValueKind::String, other)),
        }
    }

    fn decode(&self, scalar: &Scalar) -> Result<Value, DecodeError> {
        Ok(Value::String(scalar.text.clone()))
    }
}

/// Style for a string in value position
pub(crate) fn string_style(text: &str) -> ScalarStyle {
    if text.is_empty() {
        ScalarStyle::SingleQuoted
    } else if text.contains('\n') {
        if literal_safe(text) {
            ScalarStyle::Literal
        } else {
            ScalarStyle::DoubleQuoted
        }
    } else if plain_safe(text) {
        ScalarStyle::Plain
    } else if text.chars().all(printable) {
        ScalarStyle::SingleQuoted
    } else {
        ScalarStyle::DoubleQuoted
    }
}

/// Style for a mapping key; block scalars cannot be implicit keys
pub(crate) fn key_style(text: &str) -> ScalarStyle {
    match string_style(text) {
        ScalarStyle::Literal | ScalarStyle::Folded => ScalarStyle::DoubleQuoted,
        style => style,
    }
}

/// Characters that may appear unescaped in a quoted or plain scalar
pub(crate) fn printable(c: char) -> bool {
    !c.is_control() && !matches!(c, '\u{2028}' | '\u{2029}' | '\u{FEFF}' | '\u{FFFE}' | '\u{FFFF}')
}

// The block indentation is detected from the first line, and whitespace-only
// lines inside a block are folded into the indentation.
pub(crate) fn literal_safe(text: &str) -> bool {
    if !text.chars().all(|c| printable(c) || c == '\n' || c == '\t') {
        return false;
    }
    let first = text.split('\n').next().unwrap_or("");
    if first.is_empty() || first.starts_with([' ', '\t']) {
        return false;
    }
    text.split('\n')
        .all(|line| line.is_empty() || !line.chars().all(|c| c == ' ' || c == '\t'))
}

pub(crate) fn plain_safe(text: &str) -> bool {
    let (Some(first), Some(last)) = (text.chars().next(), text.chars().last()) else {
        return false;
    };
    if !text.chars().all(printable) {
        return false;
    }
    if resolve_plain(text) != Some(ValueKind::String) || is_ambiguous_1_1(text) {
        return false;
    }
    if matches!(
        first,
        '-' | '?' | ':' | ',' | '[' | ']' | '{' | '}' | '#' | '&' | '*' | '!' | '|' | '>' | '\''
            | '"' | '%' | '@' | '`' | ' '
    ) {
        return false;
    }
    if matches!(last, ' ' | ':') {
        return false;
    }
    !text.contains([':', '#', ',', '[', ']', '{', '}'])
}

/// Words and numerals a YAML 1.1 reader would not read as a string
///
/// Booleans like `yes`/`off`, and anything shaped like a 1.1 number or
/// timestamp (`1_000`, `0b101`, `2024-01-01`).
pub(crate) fn is_ambiguous_1_1(text: &str) -> bool {
    if matches!(
        text,
        "y" | "Y"
            | "yes"
            | "Yes"
            | "YES"
            | "n"
            | "N"
            | "no"
            | "No"
            | "NO"
            | "on"
            | "On"
            | "ON"
            | "off"
            | "Off"
            | "OFF"
    ) {
        return true;
    }
    let body = text.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(text);
    let starts_numeric = body
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '.');
    starts_numeric
        && body
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '+' | '-'))
}
