//! Diagnostic logging to stderr.
//!
//! Verbosity comes from `-v` flags only; no environment variable is read.
//! At the default level nothing is logged for a handled failure, so the
//! `Error: ...` line stays the only stderr output.

use tracing::Level;

/// Map the `-v` count to a maximum level.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global fmt subscriber. Call once, from `main`.
pub fn init(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
