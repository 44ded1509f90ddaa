//! Error types for fstash
//!
//! Provides a unified error type for all operations, plus the two-tier
//! classification the protocol reports on stderr: every failure is either
//! an `Invalid Command` (the protocol structure itself was unusable) or an
//! `Operation Failed` (well-formed command, but the action could not
//! complete after a resource was already acquired).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using FstashError
pub type Result<T> = std::result::Result<T, FstashError>;

/// Unified error type for fstash operations
#[derive(Debug, Error)]
pub enum FstashError {
    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("unknown command token")]
    UnknownCommand,

    #[error("input ended before a required delimiter")]
    UnexpectedEof,

    #[error("input continues past the filename boundary")]
    TrailingInput,

    #[error("filename exceeds the maximum path length")]
    PathTooLong,

    #[error("set header is missing a newline delimiter")]
    MissingDelimiter,

    #[error("content length is not a decimal number")]
    MalformedLength,

    // -------------------------------------------------------------------------
    // File Access Errors
    // -------------------------------------------------------------------------
    #[error("path is a directory: {0}")]
    IsDirectory(PathBuf),

    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    /// The input stream itself failed mid-read. Classified with the
    /// protocol errors: the command was never fully received.
    #[error("input stream error: {0}")]
    StreamRead(std::io::Error),

    /// Read/write failure on an already-acquired resource (output stream
    /// or an open destination file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The two failure categories the protocol distinguishes on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Malformed input or a path that cannot be opened at all
    InvalidCommand,

    /// A well-formed command whose action failed mid-flight
    OperationFailed,
}

impl ErrorClass {
    /// The fixed diagnostic line written to stderr for this class
    pub fn diagnostic(self) -> &'static str {
        match self {
            ErrorClass::InvalidCommand => "Invalid Command\n",
            ErrorClass::OperationFailed => "Operation Failed\n",
        }
    }
}

impl FstashError {
    /// Classify this error into the protocol's two-tier taxonomy.
    ///
    /// Only failures that happen after a file was successfully opened and
    /// the command fully validated count as `OperationFailed`; everything
    /// detected before or at the point of open is `InvalidCommand`.
    pub fn class(&self) -> ErrorClass {
        match self {
            FstashError::Io(_) => ErrorClass::OperationFailed,
            _ => ErrorClass::InvalidCommand,
        }
    }
}
