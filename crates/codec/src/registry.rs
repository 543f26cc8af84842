//! Scalar codec registry
//!
//! An ordered table of [`ScalarCodec`]s keyed by [`ValueKind`], plus a table
//! mapping resolved tags to the kind (or null) they decode as. The registry is
//! immutable once shared: encoders and decoders built by the same factory
//! hold the same `Arc<ScalarRegistry>`.

use std::collections::HashMap;
use std::sync::Arc;

use tabyaml_core::{Value, ValueKind};

use crate::error::DecodeError;
use crate::scalar::resolve::resolve_plain;
use crate::scalar::{
    BoolScalarCodec, FloatScalarCodec, IntScalarCodec, Scalar, ScalarCodec, ScalarStyle,
    StringScalarCodec, BOOL_TAG, FLOAT_TAG, INT_TAG, NON_SPECIFIC_TAG, NULL_TAG, STR_TAG,
};

/// What a tagged scalar decodes as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagTarget {
    /// Always null, whatever the text
    Null,
    /// The codec registered for this kind
    Kind(ValueKind),
}

/// Table of scalar codecs and tag mappings
#[derive(Debug, Clone, Default)]
pub struct ScalarRegistry {
    codecs: Vec<Arc<dyn ScalarCodec>>,
    tags: HashMap<String, TagTarget>,
}

impl ScalarRegistry {
    /// Registry with no codecs and no tag mappings
    pub fn empty() -> Self {
        Self::default()
    }

    /// Bool, int, float and string codecs with the core-schema tags
    ///
    /// Binary support is added by [`CodecFactory`](crate::CodecFactory).
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(BoolScalarCodec));
        registry.register(Arc::new(IntScalarCodec));
        registry.register(Arc::new(FloatScalarCodec));
        registry.register(Arc::new(StringScalarCodec));
        registry.map_tag(STR_TAG, TagTarget::Kind(ValueKind::String));
        registry.map_tag(INT_TAG, TagTarget::Kind(ValueKind::Int));
        registry.map_tag(FLOAT_TAG, TagTarget::Kind(ValueKind::Float));
        registry.map_tag(BOOL_TAG, TagTarget::Kind(ValueKind::Bool));
        registry.map_tag(NULL_TAG, TagTarget::Null);
        registry.map_tag(NON_SPECIFIC_TAG, TagTarget::Kind(ValueKind::String));
        registry
    }

    /// Install a codec, replacing any codec already registered for its kind
    pub fn register(&mut self, codec: Arc<dyn ScalarCodec>) {
        let kind = codec.kind();
        match self.codecs.iter_mut().find(|c| c.kind() == kind) {
            Some(slot) => *slot = codec,
            None => self.codecs.push(codec),
        }
    }

    /// Builder form of [`register`](Self::register)
    pub fn with_codec(mut self, codec: Arc<dyn ScalarCodec>) -> Self {
        self.register(codec);
        self
    }

    /// Map a fully resolved tag to a decode target
    pub fn map_tag(&mut self, tag: impl Into<String>, target: TagTarget) {
        self.tags.insert(tag.into(), target);
    }

    /// Builder form of [`map_tag`](Self::map_tag)
    pub fn with_tag_mapping(mut self, tag: impl Into<String>, target: TagTarget) -> Self {
        self.map_tag(tag, target);
        self
    }

    /// Drop the codec for `kind`, if any; tag mappings are kept
    pub fn remove(&mut self, kind: ValueKind) {
        self.codecs.retain(|c| c.kind() != kind);
    }

    /// Codec registered for `kind`
    pub fn codec(&self, kind: ValueKind) -> Option<&dyn ScalarCodec> {
        self.codecs
            .iter()
            .find(|c| c.kind() == kind)
            .map(|c| c.as_ref())
    }

    /// Kinds with an installed codec, in registration order
    pub fn kinds(&self) -> Vec<ValueKind> {
        self.codecs.iter().map(|c| c.kind()).collect()
    }

    /// Decode target for a resolved tag
    pub fn tag_target(&self, tag: &str) -> Option<TagTarget> {
        self.tags.get(tag).copied()
    }

    /// Decode one scalar
    ///
    /// - tagged: through the tag mapping
    /// - quoted or block: string
    /// - plain: by core-schema resolution
    ///
    /// A resolved kind without a codec falls back to the string codec, so
    /// restricting the installed kinds never makes a document unreadable.
    ///
    /// # Errors
    ///
    /// [`DecodeError::UnknownTag`] for an unmapped tag, [`DecodeError::NoCodec`]
    /// when neither the resolved kind nor string has a codec, or whatever the
    /// codec itself reports.
    pub fn decode(&self, scalar: &Scalar) -> Result<Value, DecodeError> {
        if let Some(tag) = &scalar.tag {
            return match self.tag_target(tag) {
                Some(TagTarget::Null) => Ok(Value::Null),
                Some(TagTarget::Kind(kind)) => self.decode_as(kind, scalar),
                None => Err(DecodeError::UnknownTag { tag: tag.clone() }),
            };
        }
        if scalar.style != ScalarStyle::Plain {
            return self.decode_as(ValueKind::String, scalar);
        }
        match resolve_plain(&scalar.text) {
            None => Ok(Value::Null),
            Some(kind) => match self.codec(kind) {
                Some(codec) => codec.decode(scalar),
                None => self.decode_as(ValueKind::String, scalar),
            },
        }
    }

    fn decode_as(&self, kind: ValueKind, scalar: &Scalar) -> Result<Value, DecodeError> {
        self.codec(kind)
            .ok_or(DecodeError::NoCodec { kind })?
            .decode(scalar)
    }
}
