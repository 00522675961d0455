//! Shared setup for the Legendre pairs binaries.

use std::io;

use tracing_subscriber::{fmt, EnvFilter};

/// Install the stderr log subscriber for a `-v` count.
///
/// 0 honours `RUST_LOG` and falls back to `warn`; 1 is `info`, 2 `debug`,
/// anything higher `trace`.
pub fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .init();
}
