//! Tests for the bounded reader
//!
//! These tests verify:
//! - Complete and partial fills are reported distinctly
//! - Sources that under-deliver per call still fill the buffer
//! - Stream errors surface as invalid-command class, not panics

use std::io::{Cursor, Read};

use fstash::stream::{read_chunk, read_full, FillStatus};
use fstash::{ErrorClass, FstashError};

/// Delivers the source in fixed-size slices, one per read call
struct Chunked {
    data: Vec<u8>,
    offset: usize,
    per_read: usize,
}

impl Chunked {
    fn new(data: &[u8], per_read: usize) -> Self {
        Self {
            data: data.to_vec(),
            offset: 0,
            per_read,
        }
    }
}

impl Read for Chunked {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let remaining = &self.data[self.offset..];
        let n = remaining.len().min(self.per_read).min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.offset += n;
        Ok(n)
    }
}

/// Fails every read with the given error kind
struct Failing(std::io::ErrorKind);

impl Read for Failing {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(self.0, "injected"))
    }
}

// =============================================================================
// read_full
// =============================================================================

#[test]
fn test_fill_to_capacity() {
    let mut src = Cursor::new(b"0123456789".to_vec());
    let mut buf = [0u8; 10];
    let fill = read_full(&mut src, &mut buf).unwrap();
    assert_eq!(fill.filled, 10);
    assert_eq!(fill.status, FillStatus::Complete);
}

#[test]
fn test_fill_stops_at_capacity_with_data_left() {
    let mut src = Cursor::new(b"0123456789".to_vec());
    let mut buf = [0u8; 4];
    let fill = read_full(&mut src, &mut buf).unwrap();
    assert_eq!(fill.filled, 4);
    assert_eq!(&buf, b"0123");
    // The rest stays in the source for the next consumer
    assert_eq!(src.position(), 4);
}

#[test]
fn test_short_stream_reports_partial() {
    let mut src = Cursor::new(b"abc".to_vec());
    let mut buf = [0u8; 16];
    let fill = read_full(&mut src, &mut buf).unwrap();
    assert_eq!(fill.filled, 3);
    assert!(fill.is_partial());
}

#[test]
fn test_fill_across_many_short_reads() {
    let mut src = Chunked::new(b"the quick brown fox", 3);
    let mut buf = [0u8; 19];
    let fill = read_full(&mut src, &mut buf).unwrap();
    assert_eq!(fill.status, FillStatus::Complete);
    assert_eq!(&buf[..], b"the quick brown fox");
}

#[test]
fn test_zero_capacity_buffer_completes_immediately() {
    let mut src = Cursor::new(b"data".to_vec());
    let mut buf = [0u8; 0];
    let fill = read_full(&mut src, &mut buf).unwrap();
    assert_eq!(fill.filled, 0);
    assert_eq!(fill.status, FillStatus::Complete);
    assert_eq!(src.position(), 0);
}

#[test]
fn test_read_error_is_invalid_command_class() {
    let mut src = Failing(std::io::ErrorKind::Other);
    let mut buf = [0u8; 8];
    let err = read_full(&mut src, &mut buf).unwrap_err();
    assert!(matches!(err, FstashError::StreamRead(_)));
    assert_eq!(err.class(), ErrorClass::InvalidCommand);
}

// =============================================================================
// read_chunk
// =============================================================================

#[test]
fn test_chunk_returns_one_physical_read() {
    let mut src = Chunked::new(b"abcdef", 2);
    let mut buf = [0u8; 16];
    assert_eq!(read_chunk(&mut src, &mut buf).unwrap(), 2);
    assert_eq!(&buf[..2], b"ab");
    assert_eq!(read_chunk(&mut src, &mut buf).unwrap(), 2);
    assert_eq!(&buf[..2], b"cd");
}

#[test]
fn test_chunk_reports_end_of_stream_as_zero() {
    let mut src = Cursor::new(Vec::new());
    let mut buf = [0u8; 8];
    assert_eq!(read_chunk(&mut src, &mut buf).unwrap(), 0);
}

#[test]
fn test_chunk_error_propagates() {
    let mut src = Failing(std::io::ErrorKind::BrokenPipe);
    let mut buf = [0u8; 8];
    assert!(matches!(
        read_chunk(&mut src, &mut buf).unwrap_err(),
        FstashError::StreamRead(_)
    ));
}
