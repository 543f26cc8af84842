//! Binary Fidelity Tests
//!
//! Byte columns are written as `!!binary` base64 and read back identically,
//! whatever the column is called.

use crate::common::*;
use tabyaml::scalar::BINARY_TAG;
use tabyaml::{BinaryScalarCodec, DecodeError, Scalar, ScalarCodec};

#[test]
fn bytes_encode_as_tagged_base64() {
    let t = table(["b"], vec![[Value::Bytes(vec![0, 1, 2])]]);
    assert_eq!(encode_table(&t, false), "- b: !!binary AAEC\n");
}

#[test]
fn every_byte_value_round_trips() {
    let all: Vec<u8> = (0..=255).collect();
    let t = table(["b"], vec![[Value::Bytes(all)]]);
    assert_eq!(round_trip(&t, false), t);
}

#[test]
fn utf8_looking_bytes_stay_bytes() {
    let t = table(["b"], vec![[Value::Bytes(b"hello".to_vec())], [Value::from("hello")]]);
    let decoded = round_trip(&t, false);
    assert_eq!(decoded.get(0, 0), Some(&Value::Bytes(b"hello".to_vec())));
    assert_eq!(decoded.get(1, 0), Some(&Value::from("hello")));
}

#[test]
fn dispatch_ignores_column_name() {
    let t = decode_table("- binary: aGVsbG8=\n  text: !!binary aGVsbG8=\n");
    assert_eq!(t.get(0, 0), Some(&Value::from("aGVsbG8=")));
    assert_eq!(t.get(0, 1), Some(&Value::Bytes(b"hello".to_vec())));
}

#[test]
fn verbatim_binary_tag_is_accepted() {
    let t = decode_table("- b: !<tag:yaml.org,2002:binary> AAEC\n");
    assert_eq!(t.get(0, 0), Some(&Value::Bytes(vec![0, 1, 2])));
}

#[test]
fn folded_base64_is_accepted() {
    let t = decode_table("- b: !!binary |\n    aGVs\n    bG8=\n");
    assert_eq!(t.get(0, 0), Some(&Value::Bytes(b"hello".to_vec())));
}

#[test]
fn codec_accepts_only_bytes() {
    let codec = BinaryScalarCodec;
    assert!(codec.encode(&Value::from("text")).is_err());
    assert!(codec.encode(&Value::Int(1)).is_err());
    assert!(codec.encode(&Value::Null).is_err());

    let scalar = codec.encode(&Value::Bytes(vec![0xDE, 0xAD])).unwrap();
    assert_eq!(scalar.tag.as_deref(), Some(BINARY_TAG));
    assert_eq!(codec.decode(&scalar).unwrap(), Value::Bytes(vec![0xDE, 0xAD]));
}

#[test]
fn codec_rejects_malformed_base64() {
    let err = BinaryScalarCodec
        .decode(&Scalar::plain("@@@@"))
        .unwrap_err();
    assert!(matches!(err, DecodeError::InvalidBase64(_)));
}

#[test]
fn declared_bytes_column_rejects_text() {
    let mut t = Table::with_typed_columns([("b", ColumnType::Bytes)]);
    t.push_values([Value::from("not bytes")]).unwrap();
    let (encoder, _) = codecs(false);
    let err = encoder
        .encode_to_string(&mut t.into_cursor())
        .unwrap_err();
    assert!(matches!(err, tabyaml::EncodeError::TypeMismatch { .. }));
}
