//! # fstash
//!
//! A stream-framed file content store driven over standard input/output:
//! - `get` echoes the contents of newline-delimited filenames to stdout
//! - `set` writes a declared number of payload bytes from stdin into a file
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Input Stream (stdin)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Command Parser                            │
//! │              (3-byte token, get / set)                       │
//! └──────────┬──────────────────────────────┬───────────────────┘
//!            │                              │
//!            ▼                              ▼
//!     ┌─────────────┐               ┌─────────────┐
//!     │ Get Handler │               │ Set Handler │
//!     └──────┬──────┘               └──────┬──────┘
//!            │                              │
//!            ▼                              ▼
//!     ┌────────────────────────────────────────────┐
//!     │            File Access Gateway             │
//!     └────────────────────────────────────────────┘
//! ```
//!
//! All stream parsing is built on the bounded reader in [`stream`], which
//! fills fixed-capacity buffers across as many partial reads as the source
//! requires.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod stream;
pub mod protocol;
pub mod fsio;
pub mod session;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ErrorClass, FstashError, Result};
pub use config::Config;
pub use session::Session;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of fstash
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
