//! Logging setup for the binary.
//!
//! Events go to stderr so reports written to stdout stay machine-readable.

use tracing_subscriber::{EnvFilter, fmt};

/// Filter directive for a `-v` count.
#[must_use]
pub const fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `-v` wins over `RUST_LOG`; without either, only warnings are shown.
fn build_env_filter(verbose: u8) -> EnvFilter {
    if verbose > 0 {
        return EnvFilter::new(level_for_verbosity(verbose));
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(0)))
}

/// Install the global subscriber. Returns `false` if one was already set.
pub fn init(verbose: u8) -> bool {
    fmt()
        .with_env_filter(build_env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
