//! Optional `tracing` subscriber setup
//!
//! The library only emits events. Applications that have no subscriber of
//! their own can install a formatted one here.

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered at `config.level`.
///
/// `RUST_LOG` takes precedence when set. Returns `false` if a global
/// subscriber was already installed.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
