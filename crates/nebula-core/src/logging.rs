//! Logging bootstrap on top of `tracing-subscriber`.
//!
//! The filter honours `RUST_LOG` and falls back to [`DEFAULT_FILTER`].

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,nebula_ui=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global fmt subscriber.
///
/// Panics if a global subscriber is already installed; use [`try_init`] from
/// tests and tools that may run more than once.
pub fn init() {
    tracing_subscriber::fmt().with_env_filter(env_filter()).init();
}

/// Install the global fmt subscriber unless one is already set.
///
/// Returns `true` when this call installed the subscriber.
pub fn try_init() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_test_writer()
        .try_init()
        .is_ok()
}
