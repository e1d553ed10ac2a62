//! Logging initialization.

use crate::ObservabilityConfig;
use taskboard_core::{BoardError, BoardResult};
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber from observability settings.
///
/// Called once at process start; a second call reports a configuration
/// error rather than panicking.
pub fn init_logging(config: &ObservabilityConfig) -> BoardResult<()> {
    let filter = EnvFilter::try_new(&config.log_level).map_err(|e| {
        BoardError::Configuration(format!(
            "Invalid log filter '{}': {}",
            config.log_level, e
        ))
    })?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| BoardError::Configuration(format!("Failed to install subscriber: {}", e)))
}
