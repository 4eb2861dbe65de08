//! Diagnostic logging setup.
//!
//! Library code logs through `tracing` macros. The binary installs a stderr
//! subscriber here so stdout carries only the prompt, usage line and
//! confirmation message.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "warn";

/// Filter used when `RUST_LOG` is not set and verbose output is requested.
const VERBOSE_FILTER: &str = "numpack=debug";

/// Builds the filter from `RUST_LOG`, falling back to the defaults above.
pub fn env_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
