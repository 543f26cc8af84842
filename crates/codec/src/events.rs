//! Pull reader over `yaml-rust2` parser events
//!
//! Flattens the parser's events into the handful of tokens the record decoder
//! cares about, with 1-based positions and resolved tags.

use std::str::Chars;

use yaml_rust2::parser::{Event, Parser, Tag};
use yaml_rust2::scanner::{Marker, ScanError, TScalarStyle};

use crate::error::ParseError;
use crate::scalar::{Scalar, ScalarStyle, CORE_TAG_PREFIX};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    /// Stream or document start/end; carries no content
    Boundary,
    SequenceStart,
    SequenceEnd,
    MappingStart,
    MappingEnd,
    /// `anchor` is 0 when the scalar has none
    Scalar { scalar: Scalar, anchor: usize },
    Alias(usize),
    StreamEnd,
}

impl Token {
    pub(crate) fn describe(&self) -> String {
        match self {
            Token::Boundary => "document boundary".to_string(),
            Token::SequenceStart => "a sequence".to_string(),
            Token::SequenceEnd => "end of sequence".to_string(),
            Token::MappingStart => "a mapping".to_string(),
            Token::MappingEnd => "end of mapping".to_string(),
            Token::Scalar { scalar, .. } => format!("scalar {:?}", scalar.text),
            Token::Alias(_) => "an alias".to_string(),
            Token::StreamEnd => "end of stream".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Located {
    pub(crate) token: Token,
    pub(crate) line: usize,
    pub(crate) column: usize,
}

impl Located {
    pub(crate) fn unexpected(&self, expected: &'static str) -> ParseError {
        ParseError::Unexpected {
            expected,
            found: self.token.describe(),
            line: self.line,
            column: self.column,
        }
    }
}

pub(crate) struct EventReader<'a> {
    parser: Parser<Chars<'a>>,
}

impl<'a> EventReader<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            parser: Parser::new(text.chars()),
        }
    }

    pub(crate) fn next(&mut self) -> Result<Located, ParseError> {
        let (event, marker) = self.parser.next_token().map_err(syntax_error)?;
        let (line, column) = position(&marker);
        let token = match event {
            Event::StreamEnd => Token::StreamEnd,
            Event::SequenceStart(..) => Token::SequenceStart,
            Event::SequenceEnd => Token::SequenceEnd,
            Event::MappingStart(..) => Token::MappingStart,
            Event::MappingEnd => Token::MappingEnd,
            Event::Alias(id) => Token::Alias(id),
            Event::Scalar(text, style, anchor, tag) => {
                let mut scalar = Scalar::new(text, scalar_style(style));
                scalar.tag = tag.as_ref().map(resolve_tag);
                Token::Scalar { scalar, anchor }
            }
            _ => Token::Boundary,
        };
        Ok(Located {
            token,
            line,
            column,
        })
    }

    /// Next token that is not a stream or document boundary
    pub(crate) fn next_content(&mut self) -> Result<Located, ParseError> {
        loop {
            let located = self.next()?;
            if located.token != Token::Boundary {
                return Ok(located);
            }
        }
    }

    /// Require that nothing but boundaries remains
    pub(crate) fn expect_end(&mut self) -> Result<(), ParseError> {
        let located = self.next_content()?;
        match located.token {
            Token::StreamEnd => Ok(()),
            _ => Err(located.unexpected("end of stream")),
        }
    }
}

fn position(marker: &Marker) -> (usize, usize) {
    (marker.line(), marker.col() + 1)
}

fn syntax_error(err: ScanError) -> ParseError {
    let (line, column) = position(err.marker());
    ParseError::Syntax {
        message: err.info().to_string(),
        line,
        column,
    }
}

fn scalar_style(style: TScalarStyle) -> ScalarStyle {
    match style {
        TScalarStyle::Plain => ScalarStyle::Plain,
        TScalarStyle::SingleQuoted => ScalarStyle::SingleQuoted,
        TScalarStyle::DoubleQuoted => ScalarStyle::DoubleQuoted,
        TScalarStyle::Literal => ScalarStyle::Literal,
        _ => ScalarStyle::Folded,
    }
}

fn resolve_tag(tag: &Tag) -> String {
    if tag.handle == "!!" {
        format!("{CORE_TAG_PREFIX}{}", tag.suffix)
    } else {
        format!("{}{}", tag.handle, tag.suffix)
    }
}
