//! Tracing subscriber initialization.

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::logging::LoggingConfig;

/// Initialize the global tracing subscriber.
///
/// The `RUST_LOG` environment variable takes precedence over the
/// configured level. Calling this twice is a no-op (the second install
/// fails silently), so embedding binaries and test harnesses can both
/// call it.
pub fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let result = match config.format.as_str() {
        "json" => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
        _ => fmt().pretty().with_env_filter(filter).with_target(true).try_init(),
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
