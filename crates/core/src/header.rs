//! Header rendering and read-back.
//!
//! A rendered header is exactly five newline-terminated lines:
//!
//! ```text
//! #ifndef OUT_H
//! #define OUT_H
//! #define __foo_size  3
//! #define __foo_start "\x00\x41\xFF"
//! #endif // OUT_H
//! ```
//!
//! Rendering builds the whole text in memory so the caller can write it with a
//! single flush.

use std::fmt::Write as _;
use std::io;

use thiserror::Error;

use crate::config::{size_macro_name, start_macro_name};
use crate::escape::{self, UnescapeError, ESCAPE_WIDTH};

/// Fixed text around the escaped bytes, used to pre-size the buffer.
const FRAME_OVERHEAD: usize = 96;

/// Render the header text for `bytes`.
pub fn render_header(bytes: &[u8], guard: &str, struct_name: &str) -> String {
    let capacity =
        bytes.len() * ESCAPE_WIDTH + 3 * guard.len() + 2 * struct_name.len() + FRAME_OVERHEAD;
    let mut out = String::with_capacity(capacity);

    // Writing into a String cannot fail.
    let _ = writeln!(out, "#ifndef {guard}");
    let _ = writeln!(out, "#define {guard}");
    let _ = writeln!(out, "#define {}  {}", size_macro_name(struct_name), bytes.len());
    let _ = write!(out, "#define {} \"", start_macro_name(struct_name));
    let _ = escape::write_escaped(&mut out, bytes);
    out.push_str("\"\n");
    let _ = writeln!(out, "#endif // {guard}");

    out
}

/// Render the header and hand it to `writer` in one `write_all`.
pub fn write_header<W: io::Write>(
    mut writer: W,
    bytes: &[u8],
    guard: &str,
    struct_name: &str,
) -> io::Result<()> {
    let text = render_header(bytes, guard, struct_name);
    writer.write_all(text.as_bytes())?;
    writer.flush()
}

/// Contents recovered from a header produced by [`render_header`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeader {
    /// Include-guard token from the `#ifndef` line.
    pub guard: String,
    /// Struct name recovered from the macro names.
    pub struct_name: String,
    /// Value of the `__<name>_size` macro.
    pub size: usize,
    /// Bytes decoded from the `__<name>_start` literal.
    pub bytes: Vec<u8>,
}

/// Errors produced when reading a header back.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderParseError {
    #[error("Header ended before line {line}")]
    MissingLine { line: usize },

    #[error("Line {line} is not a valid {expected} line")]
    UnexpectedLine { line: usize, expected: &'static str },

    #[error("Unexpected trailing content after line 5")]
    TrailingContent,

    #[error("Invalid size value {value:?}")]
    InvalidSize { value: String },

    #[error("Declared size {declared} does not match {actual} decoded bytes")]
    SizeMismatch { declared: usize, actual: usize },

    #[error("Invalid string literal: {0}")]
    Literal(#[from] UnescapeError),
}

/// Parse a header in the exact layout written by [`render_header`].
pub fn parse_header(text: &str) -> Result<ParsedHeader, HeaderParseError> {
    let mut lines = text.lines();
    let mut next_line = |line: usize| lines.next().ok_or(HeaderParseError::MissingLine { line });

    let guard = next_line(1)?
        .strip_prefix("#ifndef ")
        .ok_or(HeaderParseError::UnexpectedLine { line: 1, expected: "#ifndef" })?
        .to_string();

    if next_line(2)? != format!("#define {guard}") {
        return Err(HeaderParseError::UnexpectedLine { line: 2, expected: "guard #define" });
    }

    let (struct_name, size_text) = next_line(3)?
        .strip_prefix("#define __")
        .and_then(|rest| rest.rsplit_once("_size  "))
        .ok_or(HeaderParseError::UnexpectedLine { line: 3, expected: "size #define" })?;
    let struct_name = struct_name.to_string();
    let size: usize = size_text
        .parse()
        .map_err(|_| HeaderParseError::InvalidSize { value: size_text.to_string() })?;

    let start_prefix = format!("#define {} \"", start_macro_name(&struct_name));
    let body = next_line(4)?
        .strip_prefix(start_prefix.as_str())
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(HeaderParseError::UnexpectedLine { line: 4, expected: "start #define" })?;
    let bytes = escape::unescape(body)?;

    if next_line(5)? != format!("#endif // {guard}") {
        return Err(HeaderParseError::UnexpectedLine { line: 5, expected: "#endif" });
    }
    if lines.next().is_some() {
        return Err(HeaderParseError::TrailingContent);
    }

    if bytes.len() != size {
        return Err(HeaderParseError::SizeMismatch { declared: size, actual: bytes.len() });
    }

    Ok(ParsedHeader { guard, struct_name, size, bytes })
}
