//! Set Handler
//!
//! The most intricate routine in the protocol. One bounded pass pulls the
//! header burst — filename, newline, decimal length, newline, plus
//! whatever payload arrived in the same reads — into a single buffer. The
//! tokenizer splits it; the declared length then governs exactly how many
//! payload bytes reach the file, first from the in-buffer prefix and then
//! from further bounded reads off the stream.

use std::io::{Read, Write};

use bytes::BytesMut;

use crate::config::Config;
use crate::error::Result;
use crate::fsio;
use crate::protocol::parse_set_header;
use crate::stream::{read_chunk, read_full};

/// Two-character acknowledgment plus terminator
const ACK: &[u8] = b"OK\n";

/// Receive one `set` command: header, payload, acknowledgment.
pub fn handle<R: Read, W: Write>(input: &mut R, output: &mut W, config: &Config) -> Result<()> {
    // Step 1: one bounded pass for header + payload prefix
    let mut header_buf = BytesMut::zeroed(config.header_capacity());
    let fill = read_full(input, &mut header_buf)?;
    let filled = fill.filled;

    // Step 2: tokenize; all validity checks run before the file is opened,
    // so a malformed header never creates or truncates the target
    let header = parse_set_header(&header_buf[..filled])?;
    let path = fsio::location_path(&header_buf[header.location.clone()]);
    tracing::debug!(
        path = %path.display(),
        declared_len = header.declared_len,
        "set header parsed"
    );

    // Step 3: open destination (create if absent, truncate if present)
    let mut file = fsio::open_for_write(&path)?;

    // Step 4: prefix payload already sitting past the second newline.
    // Only the first declared_len bytes of it belong to this command;
    // any excess is discarded, never written.
    let prefix = &header_buf[header.payload_start..filled];
    let take = min_usize(header.declared_len, prefix.len());
    file.write_all(&prefix[..take])?;

    // Step 5: stream the remainder in bounded chunks. A zero-byte read
    // before the count is satisfied ends the transfer silently: the
    // protocol accepts an under-supplied payload as a short write.
    let mut remaining = header.declared_len - take as u64;
    let mut chunk = BytesMut::zeroed(config.transfer_buffer_size);

    while remaining > 0 {
        let want = min_usize(remaining, chunk.len());
        let n = read_chunk(input, &mut chunk[..want])?;
        if n == 0 {
            tracing::debug!(remaining, "input ended before declared length was met");
            break;
        }
        file.write_all(&chunk[..n])?;
        remaining -= n as u64;
    }

    // Step 6: acknowledge (also for a declared length of zero)
    output.write_all(ACK)?;
    output.flush()?;

    tracing::trace!(
        path = %path.display(),
        written = header.declared_len - remaining,
        "set complete"
    );
    Ok(())
}

/// `min` across the declared-length domain (`u64`) and buffer sizes
/// (`usize`) without lossy casts on 32-bit targets.
fn min_usize(declared: u64, available: usize) -> usize {
    if declared < available as u64 {
        declared as usize
    } else {
        available
    }
}
