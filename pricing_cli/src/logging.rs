//! Logging setup.
//!
//! `RUST_LOG` controls the filter (default `info`), e.g.
//! `RUST_LOG=pricing_core=debug` to see every pricing step. Logs go to
//! stderr so JSON output on stdout stays clean.

use tracing_subscriber::{fmt, EnvFilter};

pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}
