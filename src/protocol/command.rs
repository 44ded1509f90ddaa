//! Command token parsing
//!
//! The command keyword is exactly 3 bytes. Reading happens into a 4-byte
//! slot so an optional trailing newline is absorbed in the same bounded
//! read; classification then compares byte-for-byte against the four legal
//! token forms. Case-sensitive, no trimming.

use std::io::Read;

use crate::error::Result;
use crate::stream::read_full;

/// Size of the token read slot: 3 keyword bytes + optional newline
pub const TOKEN_SLOT: usize = 4;

/// The operation selected by the leading command token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Stream file contents to output
    Get,

    /// Write a declared number of payload bytes to a file
    Set,

    /// Anything that is not exactly `get`, `get\n`, `set` or `set\n`
    Invalid,
}

impl Command {
    /// Classify a token slot as filled by the bounded reader.
    ///
    /// `token` holds either 3 bytes (stream ended right after the keyword)
    /// or 4 bytes (keyword plus one more byte, which must be a newline).
    pub fn classify(token: &[u8]) -> Command {
        match token {
            b"get" | b"get\n" => Command::Get,
            b"set" | b"set\n" => Command::Set,
            _ => Command::Invalid,
        }
    }
}

/// Read and classify the command token from the input stream.
///
/// Short reads (stream closed before 3 bytes arrived) classify as
/// [`Command::Invalid`]; stream errors propagate.
pub fn read_command<R: Read>(src: &mut R) -> Result<Command> {
    let mut slot = [0u8; TOKEN_SLOT];
    let fill = read_full(src, &mut slot)?;
    Ok(Command::classify(&slot[..fill.filled]))
}
