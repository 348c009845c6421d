//! Logging setup
//!
//! Installs a JSON `tracing` subscriber on stderr so stdout stays reserved
//! for the configuration output.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Build the filter from `RUST_LOG`, falling back to `log_level`
pub fn build_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

/// Initialize the global tracing subscriber with the specified log level.
///
/// Does nothing if a subscriber is already installed.
pub fn init_tracing(log_level: &str) {
    let console_layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_filter(build_filter(log_level));

    if tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("Tracing subscriber already installed");
    }
}
