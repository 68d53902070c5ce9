//! `tracing` subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Error returned when the filter is invalid or a subscriber is already set.
pub type LoggingError = Box<dyn std::error::Error + Send + Sync>;

/// Installs a stderr formatter filtered by `level`.
///
/// The filter comes from configuration only; `RUST_LOG` is not consulted.
pub fn init(level: &str) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(level)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}
