//! File Access Gateway
//!
//! Opens files on behalf of the handlers and maps failures into the
//! protocol's error taxonomy: a path that cannot be opened at all is an
//! invalid command, while I/O errors on a file that is already open fall
//! through as operation failures at the call sites.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::error::{FstashError, Result};

/// Build a filesystem path from the raw location bytes of a command.
///
/// Unix paths are arbitrary byte sequences, so no encoding is imposed
/// there; elsewhere the bytes are interpreted as UTF-8 (lossily, with the
/// open call rejecting anything that does not resolve).
#[cfg(unix)]
pub fn location_path(bytes: &[u8]) -> PathBuf {
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(std::ffi::OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
pub fn location_path(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}

/// Open a file read-only for `get`.
///
/// Directories are rejected before any bytes are streamed; both an open
/// failure and a directory path classify as invalid commands.
pub fn open_for_read(path: &Path) -> Result<File> {
    let file = File::open(path).map_err(|source| FstashError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let meta = file.metadata().map_err(|source| FstashError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    if meta.is_dir() {
        return Err(FstashError::IsDirectory(path.to_path_buf()));
    }

    Ok(file)
}

/// Open (or create) a file for `set`, truncating any existing content.
///
/// Newly created files take the invoking user's default mode.
pub fn open_for_write(path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|source| FstashError::Open {
            path: path.to_path_buf(),
            source,
        })
}
