//! Codec Tests
//!
//! End-to-end tests for the tabyaml-codec crate:
//! - export of cursors to record sequences (exact text)
//! - import of record sequences into tables (column discovery, nulls)
//! - BinaryScalarCodec fidelity
//! - CodecFactory composition and configuration
//! - failure modes (malformed YAML, bad base64, unsupported types)

#[path = "../common/mod.rs"]
mod common;

mod binary_fidelity;
mod error_handling;
mod file_io;
mod schema_discovery;
