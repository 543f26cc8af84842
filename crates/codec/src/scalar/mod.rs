//! Scalar codecs
//!
//! A scalar codec converts one [`ValueKind`] to and from a single YAML scalar
//! token. Codecs are looked up by kind when encoding and by tag (or by
//! plain-scalar resolution) when decoding; see
//! [`ScalarRegistry`](crate::registry::ScalarRegistry).
//!
//! | Kind | Codec | Written as |
//! |------|-------|------------|
//! | Bool | [`BoolScalarCodec`] | `true` / `false` |
//! | Int | [`IntScalarCodec`] | `42` |
//! | Float | [`FloatScalarCodec`] | `1.5`, `1e100`, `.inf`, `.nan` |
//! | String | [`StringScalarCodec`] | plain, `''`, quoted, or literal block |
//! | Bytes | [`BinaryScalarCodec`] | `!!binary <base64>` |

use std::fmt;

use tabyaml_core::{Value, ValueKind};

use crate::error::{DecodeError, EncodeError};

mod binary;
mod primitive;
pub(crate) mod resolve;
pub(crate) mod text;

pub use binary::BinaryScalarCodec;
pub use primitive::{BoolScalarCodec, FloatScalarCodec, IntScalarCodec};
pub use text::StringScalarCodec;

/// Prefix shared by all YAML core-schema tags (`!!` shorthand)
pub const CORE_TAG_PREFIX: &str = "tag:yaml.org,2002:";
/// Tag carried by base64 binary scalars
pub const BINARY_TAG: &str = "tag:yaml.org,2002:binary";
/// Core string tag
pub const STR_TAG: &str = "tag:yaml.org,2002:str";
/// Core integer tag
pub const INT_TAG: &str = "tag:yaml.org,2002:int";
/// Core float tag
pub const FLOAT_TAG: &str = "tag:yaml.org,2002:float";
/// Core boolean tag
pub const BOOL_TAG: &str = "tag:yaml.org,2002:bool";
/// Core null tag
pub const NULL_TAG: &str = "tag:yaml.org,2002:null";
/// Non-specific tag (`!`), which forces a string
pub const NON_SPECIFIC_TAG: &str = "!";

/// Presentation style of a scalar token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarStyle {
    /// Unquoted
    Plain,
    /// `'...'`
    SingleQuoted,
    /// `"..."` with escapes
    DoubleQuoted,
    /// `|` block, line breaks kept verbatim
    Literal,
    /// `>` block
    Folded,
}

/// A single scalar token: text, style and optional resolved tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scalar {
    /// Scalar content, after unescaping/folding
    pub text: String,
    /// Presentation style
    pub style: ScalarStyle,
    /// Fully resolved tag (`tag:yaml.org,2002:binary`, not `!!binary`)
    pub tag: Option<String>,
}

impl Scalar {
    /// Untagged scalar with the given style
    pub fn new(text: impl Into<String>, style: ScalarStyle) -> Self {
        Self {
            text: text.into(),
            style,
            tag: None,
        }
    }

    /// Untagged plain scalar
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, ScalarStyle::Plain)
    }

    /// The explicit null scalar
    pub fn null() -> Self {
        Self::plain("null")
    }

    /// Attach a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// True for untagged plain scalars
    pub fn is_untagged_plain(&self) -> bool {
        self.tag.is_none() && self.style == ScalarStyle::Plain
    }

    /// True for an untagged plain scalar that resolves to null
    /// (`~`, `null`, `Null`, `NULL` or empty)
    pub fn is_null_literal(&self) -> bool {
        self.is_untagged_plain() && resolve::is_null(&self.text)
    }
}

/// Encoder/decoder pair for one value kind
///
/// Implementations must be stateless or internally synchronized: a registry
/// shares one instance between every encoder and decoder built from it.
///
/// # Example
///
/// ```
/// use tabyaml_codec::scalar::{BinaryScalarCodec, ScalarCodec};
/// use tabyaml_core::Value;
///
/// let codec = BinaryScalarCodec;
/// let scalar = codec.encode(&Value::Bytes(vec![0, 1, 2])).unwrap();
/// assert_eq!(scalar.text, "AAEC");
/// assert_eq!(codec.decode(&scalar).unwrap(), Value::Bytes(vec![0, 1, 2]));
/// ```
pub trait ScalarCodec: fmt::Debug + Send + Sync {
    /// Kind of value this codec handles
    fn kind(&self) -> ValueKind;

    /// Canonical tag for this kind
    fn tag(&self) -> &str;

    /// Encode a value of this codec's kind
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::WrongKind`] for a value of another kind.
    fn encode(&self, value: &Value) -> Result<Scalar, EncodeError>;

    /// Decode a scalar into a value of this codec's kind
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the text is not a valid lexical form.
    fn decode(&self, scalar: &Scalar) -> Result<Value, DecodeError>;
}

pub(crate) fn wrong_kind(codec: ValueKind, value: &Value) -> EncodeError {
    EncodeError::WrongKind {
        codec,
        actual: value.type_name(),
    }
}
