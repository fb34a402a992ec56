//! Log subscriber setup. Logs go to stderr; stdout carries JSON output.

use tracing_subscriber::EnvFilter;
use weightlog_core::Config;

/// Install the global subscriber.
///
/// Respects the `WEIGHTLOG_LOG` environment variable for filtering and
/// falls back to `logging.level` from the config file.
pub fn init(config: &Config) {
    let filter = EnvFilter::try_from_env("WEIGHTLOG_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
