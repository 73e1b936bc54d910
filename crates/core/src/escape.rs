//! Byte to string-literal escaping.
//!
//! Every byte becomes `\xHH` (two uppercase, zero-padded hex digits) with no
//! separators. Because no raw character is ever emitted, the character after
//! an escape is always another `\` or the closing quote, so a C compiler can
//! never extend a `\x` escape into a following hex digit.

use std::fmt::{self, Write};

use thiserror::Error;

/// Length of a single escape, `\xHH`.
pub const ESCAPE_WIDTH: usize = 4;

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Errors produced when reading an escaped literal body back into bytes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnescapeError {
    #[error("Escaped literal length {len} is not a multiple of 4")]
    Truncated { len: usize },

    #[error("Expected `\\x` escape at offset {offset}")]
    MissingPrefix { offset: usize },

    #[error("Invalid hex digit {found:?} at offset {offset}")]
    InvalidHex { offset: usize, found: char },
}

/// Escape `bytes` into a freshly allocated literal body (without quotes).
pub fn escape_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * ESCAPE_WIDTH);
    // Writing into a String cannot fail.
    let _ = write_escaped(&mut out, bytes);
    out
}

/// Append the escaped form of `bytes` to `out`.
pub fn write_escaped<W: Write>(out: &mut W, bytes: &[u8]) -> fmt::Result {
    for &byte in bytes {
        out.write_str("\\x")?;
        out.write_char(HEX_UPPER[usize::from(byte >> 4)] as char)?;
        out.write_char(HEX_UPPER[usize::from(byte & 0x0F)] as char)?;
    }
    Ok(())
}

/// Decode a literal body produced by [`escape_bytes`].
///
/// Only a plain concatenation of `\xHH` groups is accepted; hex digits may be
/// either case.
pub fn unescape(body: &str) -> Result<Vec<u8>, UnescapeError> {
    let raw = body.as_bytes();
    if raw.len() % ESCAPE_WIDTH != 0 {
        return Err(UnescapeError::Truncated { len: raw.len() });
    }

    let mut bytes = Vec::with_capacity(raw.len() / ESCAPE_WIDTH);
    for (index, group) in raw.chunks_exact(ESCAPE_WIDTH).enumerate() {
        let offset = index * ESCAPE_WIDTH;
        if group[0] != b'\\' || group[1] != b'x' {
            return Err(UnescapeError::MissingPrefix { offset });
        }
        let high = hex_value(group[2], offset + 2)?;
        let low = hex_value(group[3], offset + 3)?;
        bytes.push((high << 4) | low);
    }
    Ok(bytes)
}

fn hex_value(digit: u8, offset: usize) -> Result<u8, UnescapeError> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        other => Err(UnescapeError::InvalidHex { offset, found: char::from(other) }),
    }
}
