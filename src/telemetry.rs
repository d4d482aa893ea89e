//! Logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize logging for the process.
///
/// `RUST_LOG` takes precedence over `default_filter`. Logs go to stderr, so
/// they never interleave with the menu or the CSV results on stdout.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
