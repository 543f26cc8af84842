//! Error Handling Tests
//!
//! Empty documents are not errors; malformed or mis-shaped documents and
//! undecodable scalars are, and fail the whole call.

use crate::common::*;
use tabyaml::{DecodeError, EncodeError, Error, ParseError};

fn decode_err(text: &str) -> Error {
    let (_, decoder) = codecs(false);
    match decoder.decode(text) {
        Ok(_) => panic!("expected an error for {text:?}"),
        Err(err) => err,
    }
}

#[test]
fn empty_documents_decode_to_none() {
    let (_, decoder) = codecs(false);
    for text in ["", "   ", "\n\n", "# comment only\n", "---\n", "~\n", "null\n", "--- ~\n...\n"] {
        assert!(decoder.decode(text).unwrap().is_none(), "{text:?}");
    }
}

#[test]
fn empty_sequence_decodes_to_empty_table() {
    let t = decode_table("[]\n");
    assert!(t.is_empty());
    assert_eq!(t.column_count(), 0);
}

#[test]
fn zero_rows_encode_as_empty_sequence() {
    let t = Table::with_columns(["a", "b"]);
    assert_eq!(encode_table(&t, false), "[]\n");
    assert_eq!(encode_table(&t, true), "[]\n");
}

#[test]
fn syntax_error_reports_position() {
    let err = decode_err("- a: 1\n  b: 'unterminated\n");
    match err.as_parse() {
        Some(ParseError::Syntax { line, column, .. }) => {
            assert!(*line >= 2, "line {line}");
            assert!(*column >= 1);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn flow_sequence_value_is_unexpected_at_its_line() {
    let err = decode_err("- a: 1\n  b: [unclosed\n");
    match err.as_parse() {
        Some(ParseError::Unexpected { found, line, .. }) => {
            assert_eq!(found, "a sequence");
            assert_eq!(*line, 2);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn wrong_root_shapes_are_parse_errors() {
    for text in ["a: 1\n", "just text\n", "42\n", "'~'\n"] {
        assert!(decode_err(text).as_parse().is_some(), "{text:?}");
    }
}

#[test]
fn nested_values_are_parse_errors() {
    for text in ["- a: [1, 2]\n", "- a:\n    b: 1\n", "- [1, 2]\n", "- - a\n", "- 7\n"] {
        let err = decode_err(text);
        assert!(
            matches!(err.as_parse(), Some(ParseError::Unexpected { .. })),
            "{text:?}: {err}"
        );
    }
}

#[test]
fn second_document_is_rejected() {
    let err = decode_err("- a: 1\n---\n- a: 2\n");
    assert!(matches!(err.as_parse(), Some(ParseError::Unexpected { .. })));
}

#[test]
fn malformed_base64_is_decode_error() {
    let err = decode_err("- ok: 1\n- b: !!binary '%%%'\n");
    match err {
        Error::Decode { line, source, .. } => {
            assert_eq!(line, 2);
            assert!(matches!(source, DecodeError::InvalidBase64(_)));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn unknown_tag_is_decode_error() {
    let err = decode_err("- a: !!timestamp 2001-12-14\n");
    assert!(matches!(
        err.as_decode(),
        Some(DecodeError::UnknownTag { tag }) if tag.ends_with("timestamp")
    ));
}

#[test]
fn invalid_tagged_scalar_is_decode_error() {
    let err = decode_err("- a: !!int twelve\n");
    assert!(matches!(
        err.as_decode(),
        Some(DecodeError::InvalidScalar { kind: ValueKind::Int, .. })
    ));
}

#[test]
fn alias_to_collection_is_decode_error() {
    let err = decode_err("- &row {x: 1}\n- b: *row\n");
    assert_eq!(err.as_decode(), Some(&DecodeError::UnknownAlias));
}

#[test]
fn undefined_alias_is_parse_error() {
    assert!(decode_err("- a: *nowhere\n").as_parse().is_some());
}

#[test]
fn unsupported_type_names_the_type() {
    let factory = CodecFactory::new().scalars([ValueKind::String]);
    let t = table(["when"], vec![[Value::Float(1.5)]]);
    let err = factory
        .encoder()
        .encode_to_string(&mut t.into_cursor())
        .unwrap_err();
    assert!(matches!(err, EncodeError::UnsupportedType { .. }));
    let msg = err.to_string();
    assert!(msg.contains("float"), "{msg}");
    assert!(msg.contains("when"), "{msg}");
}

#[test]
fn failing_sink_is_io_error() {
    struct Broken;

    impl std::io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let (encoder, _) = codecs(false);
    let err = encoder
        .encode(&mut mixed_table().into_cursor(), Broken)
        .unwrap_err();
    assert!(matches!(err, EncodeError::Io(_)));
}

#[test]
fn failing_cursor_is_cursor_error() {
    struct Failing;

    impl Cursor for Failing {
        fn advance(&mut self) -> Result<bool, tabyaml::TableError> {
            Err(tabyaml::TableError::source("connection reset"))
        }

        fn field_count(&self) -> usize {
            1
        }

        fn field_name(&self, _: usize) -> Result<&str, tabyaml::TableError> {
            Ok("a")
        }

        fn field_type(&self, _: usize) -> Result<ColumnType, tabyaml::TableError> {
            Ok(ColumnType::Any)
        }

        fn is_null(&self, _: usize) -> Result<bool, tabyaml::TableError> {
            Ok(true)
        }

        fn value(&self, _: usize) -> Result<Value, tabyaml::TableError> {
            Ok(Value::Null)
        }
    }

    let (encoder, _) = codecs(false);
    let err = encoder.encode_to_string(&mut Failing).unwrap_err();
    assert!(matches!(err, EncodeError::Cursor(_)));
    assert!(err.to_string().contains("connection reset"));
}
