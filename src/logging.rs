//! Diagnostic logging
//!
//! Log lines go to stderr so they never interleave with the game on stdout.

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber; `RUST_LOG` overrides `level`
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
