//! Set-header tokenizer
//!
//! A `set` header arrives as `<filename>\n<decimal length>\n`, usually
//! bundled with the leading payload bytes in the same physical read. The
//! tokenizer scans an owned byte buffer once and hands back explicit index
//! ranges rather than pointers into the buffer, so the caller keeps full
//! control over the backing storage.

use std::ops::Range;

use crate::error::{FstashError, Result};

/// Parsed layout of a `set` header within its read buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetHeader {
    /// Byte range of the destination filename (newline excluded)
    pub location: Range<usize>,

    /// Number of payload bytes the client declared
    pub declared_len: u64,

    /// Offset of the first payload byte within the buffer; everything in
    /// `buf[payload_start..]` is prefix payload
    pub payload_start: usize,
}

/// Tokenize a `set` header from the filled portion of the read buffer.
///
/// Fails with [`FstashError::MissingDelimiter`] if either newline is
/// absent, and [`FstashError::MalformedLength`] if the length field is
/// empty, contains a non-digit byte, or overflows `u64`. Both checks run
/// before the destination file is ever opened, so a malformed header never
/// creates or truncates anything.
pub fn parse_set_header(buf: &[u8]) -> Result<SetHeader> {
    let first_nl = find_newline(buf, 0).ok_or(FstashError::MissingDelimiter)?;
    let second_nl = find_newline(buf, first_nl + 1).ok_or(FstashError::MissingDelimiter)?;

    let declared_len = parse_decimal(&buf[first_nl + 1..second_nl])?;

    Ok(SetHeader {
        location: 0..first_nl,
        declared_len,
        payload_start: second_nl + 1,
    })
}

/// Position of the next newline at or after `from`
fn find_newline(buf: &[u8], from: usize) -> Option<usize> {
    buf.get(from..)?
        .iter()
        .position(|&b| b == b'\n')
        .map(|pos| from + pos)
}

/// Parse a non-empty, digits-only decimal field.
///
/// Stricter than `str::parse`, which would also accept a leading `+`.
fn parse_decimal(field: &[u8]) -> Result<u64> {
    if field.is_empty() || !field.iter().all(|b| b.is_ascii_digit()) {
        return Err(FstashError::MalformedLength);
    }

    let mut value: u64 = 0;
    for &digit in field {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(digit - b'0')))
            .ok_or(FstashError::MalformedLength)?;
    }

    Ok(value)
}
