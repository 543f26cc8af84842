//! Block-sequence writer
//!
//! Writes exactly one shape: a block sequence of flat block mappings whose
//! keys and values are scalars.
//!
//! ```text
//! - id: 1
//!   name: a
//!   note: |-
//!     two
//!     lines
//! - {}
//! ```
//!
//! An empty sequence is written `[]`.

use std::io::{self, Write};

use crate::scalar::text::{key_style, literal_safe, printable};
use crate::scalar::{Scalar, ScalarStyle, CORE_TAG_PREFIX};

/// Longest implicit key, in characters
const MAX_IMPLICIT_KEY: usize = 1024;

const ENTRY_INDENT: &str = "  ";
const BLOCK_INDENT: &str = "    ";

pub(crate) struct YamlWriter<W: Write> {
    out: W,
    records: usize,
    fields: usize,
}

impl<W: Write> YamlWriter<W> {
    pub(crate) fn new(out: W) -> Self {
        Self {
            out,
            records: 0,
            fields: 0,
        }
    }

    pub(crate) fn begin_record(&mut self) {
        self.fields = 0;
    }

    pub(crate) fn entry(&mut self, key: &str, value: &Scalar) -> io::Result<()> {
        let lead = if self.fields == 0 { "- " } else { ENTRY_INDENT };
        self.fields += 1;

        let key = render_inline(&Scalar::new(key, key_style(key)));
        if key.chars().count() > MAX_IMPLICIT_KEY {
            write!(self.out, "{lead}? {key}\n{ENTRY_INDENT}:")?;
        } else {
            write!(self.out, "{lead}{key}:")?;
        }
        self.value(value)
    }

    pub(crate) fn end_record(&mut self) -> io::Result<()> {
        if self.fields == 0 {
            self.out.write_all(b"- {}\n")?;
        }
        self.records += 1;
        Ok(())
    }

    /// Close the sequence and flush; returns the number of records written
    pub(crate) fn finish(mut self) -> io::Result<usize> {
        if self.records == 0 {
            self.out.write_all(b"[]\n")?;
        }
        self.out.flush()?;
        Ok(self.records)
    }

    fn value(&mut self, scalar: &Scalar) -> io::Result<()> {
        if let Some(tag) = &scalar.tag {
            write!(self.out, " {}", render_tag(tag))?;
        }
        let block = matches!(scalar.style, ScalarStyle::Literal | ScalarStyle::Folded)
            && literal_safe(&scalar.text);
        if block {
            return self.literal(&scalar.text);
        }
        if scalar.style == ScalarStyle::Plain && scalar.text.is_empty() {
            return self.out.write_all(b"\n");
        }
        writeln!(self.out, " {}", render_inline(scalar))
    }

    fn literal(&mut self, text: &str) -> io::Result<()> {
        let body = text.trim_end_matches('\n');
        let trailing = text.len() - body.len();
        let chomp = match trailing {
            0 => "-",
            1 => "",
            _ => "+",
        };
        writeln!(self.out, " |{chomp}")?;
        for line in body.split('\n') {
            if line.is_empty() {
                self.out.write_all(b"\n")?;
            } else {
                writeln!(self.out, "{BLOCK_INDENT}{line}")?;
            }
        }
        for _ in 1..trailing {
            self.out.write_all(b"\n")?;
        }
        Ok(())
    }
}

fn render_tag(tag: &str) -> String {
    match tag.strip_prefix(CORE_TAG_PREFIX) {
        Some(suffix) if !suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_alphanumeric()) => {
            format!("!!{suffix}")
        }
        _ => format!("!<{tag}>"),
    }
}

/// Single-line rendering; falls back to double quotes whenever the requested
/// style cannot carry the text
fn render_inline(scalar: &Scalar) -> String {
    let text = &scalar.text;
    match scalar.style {
        ScalarStyle::Plain if !text.is_empty() && text.chars().all(printable) => text.clone(),
        ScalarStyle::SingleQuoted if text.chars().all(printable) => {
            format!("'{}'", text.replace('\'', "''"))
        }
        _ => double_quoted(text),
    }
}

fn double_quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{B}' => out.push_str("\\v"),
            '\u{C}' => out.push_str("\\f"),
            '\u{1B}' => out.push_str("\\e"),
            '\u{85}' => out.push_str("\\N"),
            '\u{2028}' => out.push_str("\\L"),
            '\u{2029}' => out.push_str("\\P"),
            c if printable(c) => out.push(c),
            c => {
                let code = c as u32;
                if code <= 0xFF {
                    out.push_str(&format!("\\x{code:02X}"));
                } else if code <= 0xFFFF {
                    out.push_str(&format!("\\u{code:04X}"));
                } else {
                    out.push_str(&format!("\\U{code:08X}"));
                }
            }
        }
    }
    out.push('"');
    out
}
