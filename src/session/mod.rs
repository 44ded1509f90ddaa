//! Session Module
//!
//! One session serves exactly one command sequence end to end: classify
//! the leading token, then hand the streams to the get or set handler.
//! The session is generic over its input and output so the full protocol
//! logic runs against in-memory streams in tests; nothing in here ever
//! terminates the process — errors propagate to the binary, which owns
//! the diagnostic side effect.

mod get;
mod set;

use std::io::{Read, Write};

use crate::config::Config;
use crate::error::{FstashError, Result};
use crate::protocol::{read_command, Command};

/// Drives one protocol exchange over a pair of byte streams
pub struct Session<R: Read, W: Write> {
    /// Command and payload source (stdin in the binary)
    input: R,

    /// Destination for file contents and acknowledgments (stdout)
    output: W,

    /// Buffer sizing knobs
    config: Config,
}

impl<R: Read, W: Write> Session<R, W> {
    /// Create a session over the given streams
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Run the session to completion.
    ///
    /// Reads one command token and dispatches. Returns when the input
    /// stream is exhausted (success) or the first error is hit.
    pub fn run(&mut self) -> Result<()> {
        let command = read_command(&mut self.input)?;
        tracing::debug!(?command, "command classified");

        match command {
            Command::Get => get::handle(&mut self.input, &mut self.output, &self.config),
            Command::Set => set::handle(&mut self.input, &mut self.output, &self.config),
            Command::Invalid => Err(FstashError::UnknownCommand),
        }
    }
}
