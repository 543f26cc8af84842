//! Encoder/decoder assembly
//!
//! [`CodecFactory`] is the one place scalar codecs, tag mappings and the
//! null policy come together. Every [`Encoder`] and [`Decoder`] it hands out
//! shares the same [`ScalarRegistry`], so a decoder always reads what an
//! encoder from the same factory writes.
//!
//! # Example
//!
//! ```
//! use tabyaml_codec::CodecFactory;
//! use tabyaml_core::{Table, Value};
//!
//! let factory = CodecFactory::new().include_nulls(true);
//!
//! let mut table = Table::with_columns(["id", "blob"]);
//! table.push_values([Value::Int(1), Value::Bytes(vec![0, 1, 2])]).unwrap();
//!
//! let text = factory.encoder().encode_to_string(&mut table.clone().into_cursor()).unwrap();
//! assert_eq!(text, "- id: 1\n  blob: !!binary AAEC\n");
//!
//! let cursor = factory.decoder().decode(&text).unwrap().unwrap();
//! assert_eq!(cursor.into_table(), table);
//! ```

use std::fs::File;
use std::io::{BufWriter, Read};
use std::path::Path;
use std::sync::{Arc, OnceLock};

use tabyaml_core::{Cursor, TableCursor, ValueKind};
use tracing::debug;

use crate::config::CodecConfig;
use crate::error::{EncodeError, Result};
use crate::record::TabularRecordCodec;
use crate::registry::{ScalarRegistry, TagTarget};
use crate::scalar::{BinaryScalarCodec, ScalarCodec, BINARY_TAG};

/// Builder for [`Encoder`]s and [`Decoder`]s with consistent settings
#[derive(Debug, Clone)]
pub struct CodecFactory {
    include_nulls: bool,
    scalars: Vec<ValueKind>,
    custom: Vec<Arc<dyn ScalarCodec>>,
    tag_mappings: Vec<(String, TagTarget)>,
    registry: OnceLock<Arc<ScalarRegistry>>,
}

impl CodecFactory {
    /// Create a factory with every built-in scalar codec and nulls omitted
    pub fn new() -> Self {
        Self {
            include_nulls: false,
            scalars: ValueKind::ALL.to_vec(),
            custom: Vec::new(),
            tag_mappings: Vec::new(),
            registry: OnceLock::new(),
        }
    }

    /// Create a factory from loaded configuration
    pub fn from_config(config: &CodecConfig) -> Self {
        Self::new()
            .include_nulls(config.include_nulls)
            .scalars(config.scalars.iter().copied())
    }

    /// Write null fields as `key: null` instead of omitting them
    pub fn include_nulls(mut self, include: bool) -> Self {
        self.include_nulls = include;
        self
    }

    /// Restrict the built-in scalar codecs to `kinds`
    pub fn scalars(mut self, kinds: impl IntoIterator<Item = ValueKind>) -> Self {
        self.scalars = kinds.into_iter().collect();
        self.registry = OnceLock::new();
        self
    }

    /// Install a custom codec, replacing the built-in one for its kind
    ///
    /// The codec's own tag is mapped to its kind so that tagged output reads
    /// back.
    pub fn with_scalar_codec(mut self, codec: Arc<dyn ScalarCodec>) -> Self {
        self.custom.push(codec);
        self.registry = OnceLock::new();
        self
    }

    /// Map an additional resolved tag on import
    pub fn with_tag_mapping(mut self, tag: impl Into<String>, target: TagTarget) -> Self {
        self.tag_mappings.push((tag.into(), target));
        self.registry = OnceLock::new();
        self
    }

    /// The registry shared by every encoder and decoder from this factory
    pub fn registry(&self) -> Arc<ScalarRegistry> {
        self.registry
            .get_or_init(|| Arc::new(self.build_registry()))
            .clone()
    }

    fn build_registry(&self) -> ScalarRegistry {
        let mut registry = ScalarRegistry::standard()
            .with_codec(Arc::new(BinaryScalarCodec))
            .with_tag_mapping(BINARY_TAG, TagTarget::Kind(ValueKind::Bytes));
        for kind in ValueKind::ALL {
            if !self.scalars.contains(&kind) {
                registry.remove(kind);
            }
        }
        for codec in &self.custom {
            registry.map_tag(codec.tag(), TagTarget::Kind(codec.kind()));
            registry.register(Arc::clone(codec));
        }
        for (tag, target) in &self.tag_mappings {
            registry.map_tag(tag.clone(), *target);
        }
        debug!(
            target: "tabyaml::factory",
            kinds = ?registry.kinds(),
            include_nulls = self.include_nulls,
            "Built scalar registry"
        );
        registry
    }

    fn record_codec(&self) -> TabularRecordCodec {
        TabularRecordCodec::new(self.registry(), self.include_nulls)
    }

    /// A ready encoder
    pub fn encoder(&self) -> Encoder {
        Encoder {
            codec: self.record_codec(),
        }
    }

    /// A ready decoder
    pub fn decoder(&self) -> Decoder {
        Decoder {
            codec: self.record_codec(),
        }
    }
}

impl Default for CodecFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Cursor → YAML
#[derive(Debug, Clone)]
pub struct Encoder {
    codec: TabularRecordCodec,
}

impl Encoder {
    /// Write every remaining row of `cursor` to `out`, returning the record count
    ///
    /// # Errors
    ///
    /// See [`TabularRecordCodec::encode`].
    pub fn encode<C, W>(&self, cursor: &mut C, out: W) -> std::result::Result<usize, EncodeError>
    where
        C: Cursor + ?Sized,
        W: std::io::Write,
    {
        self.codec.encode(cursor, out)
    }

    /// Encode `cursor` into a string
    ///
    /// # Errors
    ///
    /// See [`TabularRecordCodec::encode`].
    pub fn encode_to_string<C>(&self, cursor: &mut C) -> std::result::Result<String, EncodeError>
    where
        C: Cursor + ?Sized,
    {
        self.codec.encode_to_string(cursor)
    }

    /// Encode `cursor` into a file, creating or truncating it
    ///
    /// # Errors
    ///
    /// See [`TabularRecordCodec::encode`]; file creation failures are
    /// [`EncodeError::Io`].
    pub fn encode_to_file<C>(&self, cursor: &mut C, path: &Path) -> std::result::Result<usize, EncodeError>
    where
        C: Cursor + ?Sized,
    {
        let file = File::create(path)?;
        self.codec.encode(cursor, BufWriter::new(file))
    }

    /// Whether null fields are written explicitly
    pub fn include_nulls(&self) -> bool {
        self.codec.include_nulls()
    }
}

/// YAML → cursor
#[derive(Debug, Clone)]
pub struct Decoder {
    codec: TabularRecordCodec,
}

impl Decoder {
    /// Decode a document; `Ok(None)` for a document with no content
    ///
    /// # Errors
    ///
    /// See [`TabularRecordCodec::decode_str`].
    pub fn decode(&self, text: &str) -> Result<Option<TableCursor>> {
        self.codec.decode_str(text)
    }

    /// Read a whole document from `reader` and decode it
    ///
    /// # Errors
    ///
    /// [`Error::Io`](crate::Error::Io) if reading fails or the input is not
    /// UTF-8, otherwise as [`decode`](Self::decode).
    pub fn decode_reader<R: Read>(&self, mut reader: R) -> Result<Option<TableCursor>> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.decode(&text)
    }

    /// Decode the document stored at `path`
    ///
    /// # Errors
    ///
    /// As [`decode_reader`](Self::decode_reader).
    pub fn decode_file(&self, path: &Path) -> Result<Option<TableCursor>> {
        self.decode_reader(File::open(path)?)
    }
}
