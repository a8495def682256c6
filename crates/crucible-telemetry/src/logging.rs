//! Subscriber installation.
//!
//! One global `tracing` subscriber per process. The filter is built from
//! the configured level but `RUST_LOG` style directives inside it still
//! work, so `CRUCIBLE_LOG_LEVEL=info,crucible_orchestrator=debug` does
//! what it says.

use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

use crate::{TelemetryConfig, TelemetryError};

/// Guard returned by [`init_logging`]. Currently a marker; held for
/// symmetry with guards that flush on drop.
pub struct LoggingGuard {
    _initialized: bool,
}

/// Install the global subscriber.
///
/// Fails if a subscriber is already installed or the level filter does
/// not parse.
pub fn init_logging(config: &TelemetryConfig) -> Result<LoggingGuard, TelemetryError> {
    let filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| TelemetryError::Config(format!("invalid log filter: {}", e)))?;

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(config.with_targets);

    let install = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    install.map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;

    tracing::debug!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "logging initialized"
    );

    Ok(LoggingGuard { _initialized: true })
}
