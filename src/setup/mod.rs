use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{LogError, LogResult};

/// Install a stderr tracing subscriber for the logger's own diagnostics.
///
/// `RUST_LOG` takes precedence over `default_filter`. Fails if a global subscriber
/// is already installed.
pub fn init_diagnostics(default_filter: &str) -> LogResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .map_err(|e| LogError::ConfigError(format!("Invalid log filter: {}", e)))?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init()
        .map_err(|e| LogError::ConfigError(format!("Failed to initialize diagnostics: {}", e)))
}
