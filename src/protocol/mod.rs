//! Protocol Module
//!
//! Defines the line/length-delimited wire protocol carried over stdin.
//!
//! ## Wire Format
//!
//! ```text
//! get\n
//! <filename>\n          (repeated until end of stream)
//!
//! set\n
//! <filename>\n<decimal length>\n<payload bytes...>
//! ```
//!
//! The command token is exactly 3 bytes, optionally followed by a newline.
//! For `set`, the filename, length and any leading payload may all arrive
//! in the same physical read; the header tokenizer accounts for that
//! *prefix payload* explicitly.

mod command;
mod header;

pub use command::{read_command, Command};
pub use header::{parse_set_header, SetHeader};
