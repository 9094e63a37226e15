//! Diagnostic logging.
//!
//! Logs go to stderr so game text on stdout stays clean.

use tracing_subscriber::EnvFilter;

use crate::config::GameConfig;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "TEXTADV_LOG";

/// Installs the global `tracing` subscriber.
///
/// `TEXTADV_LOG` takes precedence over the configured filter. Returns
/// `false` if a subscriber was already installed.
pub fn init_logging(config: &GameConfig) -> bool {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok()
}
