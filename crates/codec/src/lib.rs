//! YAML record codecs for tabyaml
//!
//! Converts between a [`Cursor`](tabyaml_core::Cursor) and a YAML block
//! sequence of flat mappings, one mapping per row:
//!
//! ```yaml
//! - id: 1
//!   name: ''
//!   photo: !!binary iVBORw0KGgo=
//! - id: 2
//!   bio: |-
//!     first line
//!     second line
//! ```
//!
//! - [`TabularRecordCodec`]: the cursor ⇄ records mapping
//! - [`scalar`]: per-kind scalar codecs, including [`BinaryScalarCodec`]
//! - [`ScalarRegistry`]: kind and tag dispatch
//! - [`CodecFactory`]: assembles [`Encoder`]s and [`Decoder`]s
//! - [`CodecConfig`]: the factory's knobs, loadable from `tabyaml.toml`
//!
//! Logging goes through `tracing` under the `tabyaml::encode`,
//! `tabyaml::decode` and `tabyaml::factory` targets.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod emit;
mod error;
mod events;
mod factory;
mod record;
mod registry;
pub mod scalar;

pub use config::{CodecConfig, CONFIG_FILE_NAME};
pub use error::{ConfigError, DecodeError, EncodeError, Error, ParseError, Result};
pub use factory::{CodecFactory, Decoder, Encoder};
pub use record::TabularRecordCodec;
pub use registry::{ScalarRegistry, TagTarget};
pub use scalar::{BinaryScalarCodec, Scalar, ScalarCodec, ScalarStyle, BINARY_TAG};
