//! fstash Binary
//!
//! Reads one command sequence from stdin and serves it. All protocol
//! logic lives in the library; this binary owns the terminal side
//! effects: the fixed stderr diagnostic and the process exit code.

use std::io::Write;

use clap::Parser;
use fstash::{Config, Session};
use tracing_subscriber::{fmt, EnvFilter};

/// fstash - file content store over standard I/O
#[derive(Parser, Debug)]
#[command(name = "fstash")]
#[command(about = "Stream-framed file content store driven over stdin/stdout")]
#[command(version)]
struct Args {
    /// Transfer buffer size in bytes (file streaming and payload chunks)
    #[arg(short = 'b', long, default_value = "4096")]
    buffer_size: usize,

    /// Maximum accepted path length in bytes
    #[arg(short = 'p', long, default_value = "4096")]
    max_path: usize,
}

fn main() {
    // Diagnostics stay off unless RUST_LOG asks for them: stderr belongs
    // to the protocol's two fixed failure messages
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .transfer_buffer_size(args.buffer_size)
        .max_path_len(args.max_path)
        .build();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config);

    if let Err(e) = session.run() {
        tracing::debug!(error = %e, "session failed");
        let _ = std::io::stderr().write_all(e.class().diagnostic().as_bytes());
        std::process::exit(1);
    }
}
