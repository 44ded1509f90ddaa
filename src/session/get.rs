//! Get Handler
//!
//! Accepts newline-delimited filenames until the input stream ends and
//! streams each file's bytes to output in bounded chunks. A newline must
//! arrive as the final byte of the data accumulated so far; any bytes
//! following it in the same physical read mean the client ran commands
//! together, which the protocol rejects.

use std::io::{Read, Write};
use std::path::Path;

use bytes::BytesMut;

use crate::config::Config;
use crate::error::{FstashError, Result};
use crate::fsio;
use crate::stream::read_chunk;

/// Serve newline-delimited filenames until end of stream.
pub fn handle<R: Read, W: Write>(input: &mut R, output: &mut W, config: &Config) -> Result<()> {
    let capacity = config.header_capacity();

    loop {
        // Fresh buffer per filename; nothing carries across commands
        let mut buf = BytesMut::zeroed(capacity);
        let mut filled = 0;

        let location_len = loop {
            let n = read_chunk(input, &mut buf[filled..])?;
            if n == 0 {
                if filled == 0 {
                    // Clean end of stream after zero or more complete names
                    return Ok(());
                }
                // Name started but its newline never arrived
                return Err(FstashError::UnexpectedEof);
            }
            filled += n;

            if let Some(pos) = buf[..filled].iter().position(|&b| b == b'\n') {
                if pos != filled - 1 {
                    return Err(FstashError::TrailingInput);
                }
                break pos;
            }

            if filled == capacity {
                return Err(FstashError::PathTooLong);
            }
        };

        let path = fsio::location_path(&buf[..location_len]);
        tracing::debug!(path = %path.display(), "streaming file to output");
        stream_file(&path, output, config)?;
    }
}

/// Open one file and forward its bytes to output in bounded chunks.
///
/// Open failures and directories are invalid commands; failures on the
/// already-open file or the output stream are operation failures.
fn stream_file<W: Write>(path: &Path, output: &mut W, config: &Config) -> Result<()> {
    let mut file = fsio::open_for_read(path)?;
    let mut buf = BytesMut::zeroed(config.transfer_buffer_size);
    let mut total = 0u64;

    loop {
        let n = match file.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        output.write_all(&buf[..n])?;
        total += n as u64;
    }
    output.flush()?;

    tracing::trace!(path = %path.display(), bytes = total, "file streamed");
    Ok(())
}
