//! Configuration for fstash
//!
//! Centralized configuration with sensible defaults.

/// Default size of the transfer buffer (file streaming and payload chunks)
pub const DEFAULT_TRANSFER_BUFFER_SIZE: usize = 4096;

/// Default maximum path length accepted in a command
pub const DEFAULT_MAX_PATH_LEN: usize = 4096;

/// Main configuration for a fstash session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // I/O Configuration
    // -------------------------------------------------------------------------
    /// Upper bound on a single read/write chunk, for both file streaming
    /// and payload transfer
    pub transfer_buffer_size: usize,

    /// Maximum accepted filename length; also caps the set header buffer
    /// (filename + newline + decimal length + newline + payload prefix)
    pub max_path_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            transfer_buffer_size: DEFAULT_TRANSFER_BUFFER_SIZE,
            max_path_len: DEFAULT_MAX_PATH_LEN,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Capacity of the header/filename accumulation buffers.
    ///
    /// One byte past the maximum path so a newline terminating a
    /// maximum-length name still fits.
    pub fn header_capacity(&self) -> usize {
        self.max_path_len + 1
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the transfer buffer size (in bytes)
    pub fn transfer_buffer_size(mut self, size: usize) -> Self {
        self.config.transfer_buffer_size = size;
        self
    }

    /// Set the maximum path length (in bytes)
    pub fn max_path_len(mut self, len: usize) -> Self {
        self.config.max_path_len = len;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
