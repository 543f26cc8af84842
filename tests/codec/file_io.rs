//! File I/O Tests
//!
//! Encoding to and decoding from files, and loading the codec config file.

use std::fs;

use crate::common::*;
use tabyaml::{CodecConfig, ConfigError, Error, CONFIG_FILE_NAME};
use tempfile::TempDir;

#[test]
fn encode_to_file_then_decode_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("export.yaml");
    let (encoder, decoder) = codecs(true);

    let written = encoder
        .encode_to_file(&mut mixed_table().into_cursor(), &path)
        .unwrap();
    assert_eq!(written, 2);

    let cursor = decoder.decode_file(&path).unwrap().unwrap();
    assert_eq!(cursor.into_table(), mixed_table());
}

#[test]
fn file_contents_match_string_encoding() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("export.yaml");
    let (encoder, _) = codecs(false);

    encoder
        .encode_to_file(&mut mixed_table().into_cursor(), &path)
        .unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), encode_table(&mixed_table(), false));
}

#[test]
fn empty_file_decodes_to_none() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.yaml");
    fs::write(&path, "").unwrap();

    let (_, decoder) = codecs(false);
    assert!(decoder.decode_file(&path).unwrap().is_none());
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let (_, decoder) = codecs(false);
    let err = decoder
        .decode_file(&dir.path().join("absent.yaml"))
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn non_utf8_input_is_io_error() {
    let (_, decoder) = codecs(false);
    let err = decoder.decode_reader(&[0xFF, 0xFE, 0x00][..]).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn config_file_drives_factory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "include_nulls = true\n").unwrap();

    let config = CodecConfig::from_file(&path).unwrap();
    let factory = CodecFactory::from_config(&config);
    assert!(factory.encoder().include_nulls());
}

#[test]
fn default_config_file_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, CodecConfig::default_toml()).unwrap();
    assert_eq!(CodecConfig::from_file(&path).unwrap(), CodecConfig::default());
}

#[test]
fn malformed_config_file_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "include_nulls = \"sometimes\"\n").unwrap();
    assert!(matches!(
        CodecConfig::from_file(&path),
        Err(ConfigError::Parse(_))
    ));
}
