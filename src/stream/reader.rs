//! Bounded Reader
//!
//! A source stream may deliver fewer bytes per read than requested, so the
//! parser must never assume one read call fills a buffer. `read_full`
//! drives a cursor across repeated reads until the destination is full or
//! the stream ends, and reports which of the two happened via
//! [`FillStatus`] instead of a sentinel byte count.

use std::io::Read;

use crate::error::{FstashError, Result};

/// How a bounded read loop terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillStatus {
    /// The destination buffer was filled to capacity
    Complete,

    /// The stream ended before the buffer was full
    Partial,
}

/// Outcome of one bounded read loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fill {
    /// Total bytes placed into the destination buffer
    pub filled: usize,

    /// Whether the buffer reached capacity or the stream ended early
    pub status: FillStatus,
}

impl Fill {
    /// True if the stream ended before the buffer was full
    pub fn is_partial(&self) -> bool {
        self.status == FillStatus::Partial
    }
}

/// Fill `buf` from `src`, issuing as many reads as necessary.
///
/// Advances a cursor by the number of bytes each read actually returns,
/// until the buffer is full or a read returns zero bytes (end of stream).
/// Interrupted reads are retried; any other read error is reported as
/// [`FstashError::StreamRead`].
pub fn read_full<R: Read>(src: &mut R, buf: &mut [u8]) -> Result<Fill> {
    let mut filled = 0;

    while filled < buf.len() {
        match src.read(&mut buf[filled..]) {
            Ok(0) => {
                return Ok(Fill {
                    filled,
                    status: FillStatus::Partial,
                });
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(FstashError::StreamRead(e)),
        }
    }

    Ok(Fill {
        filled,
        status: FillStatus::Complete,
    })
}

/// Issue a single read into `buf`, retrying only on interruption.
///
/// Returns the byte count from that one read; zero means end of stream.
/// Used where the caller wants data as soon as it arrives rather than a
/// full buffer (payload streaming, incremental filename accumulation).
pub fn read_chunk<R: Read>(src: &mut R, buf: &mut [u8]) -> Result<usize> {
    loop {
        match src.read(buf) {
            Ok(n) => return Ok(n),
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(FstashError::StreamRead(e)),
        }
    }
}
