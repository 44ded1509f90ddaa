//! Tests for the file access gateway
//!
//! Open failures and directory paths must classify as invalid commands;
//! `open_for_write` must create absent files and truncate existing ones.

use std::fs::File;
use std::io::{Read, Write};

use fstash::fsio::{open_for_read, open_for_write};
use fstash::{ErrorClass, FstashError};
use tempfile::TempDir;

#[test]
fn test_open_for_read_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = open_for_read(&dir.path().join("absent")).unwrap_err();
    assert!(matches!(err, FstashError::Open { .. }));
    assert_eq!(err.class(), ErrorClass::InvalidCommand);
}

#[test]
fn test_open_for_read_rejects_directory() {
    let dir = TempDir::new().unwrap();
    let err = open_for_read(dir.path()).unwrap_err();
    assert!(matches!(err, FstashError::IsDirectory(_)));
    assert_eq!(err.class(), ErrorClass::InvalidCommand);
}

#[test]
fn test_open_for_write_creates_and_truncates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.bin");

    let mut f = open_for_write(&path).unwrap();
    f.write_all(b"first contents").unwrap();
    drop(f);

    // Re-opening truncates
    let f = open_for_write(&path).unwrap();
    drop(f);

    let mut contents = Vec::new();
    File::open(&path).unwrap().read_to_end(&mut contents).unwrap();
    assert!(contents.is_empty());
}

#[test]
fn test_open_for_write_rejects_directory_path() {
    let dir = TempDir::new().unwrap();
    let err = open_for_write(dir.path()).unwrap_err();
    assert!(matches!(err, FstashError::Open { .. }));
    assert_eq!(err.class(), ErrorClass::InvalidCommand);
}
