//! Stream Module
//!
//! The bounded reader primitive underlying all protocol parsing: fill a
//! fixed-capacity buffer from a non-seekable source across as many partial
//! reads as it takes, and report short fills distinctly from stream errors.

mod reader;

pub use reader::{read_full, read_chunk, Fill, FillStatus};
