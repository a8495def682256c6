//! # Crucible Telemetry
//!
//! Structured logging setup shared by every Crucible binary and test
//! harness. Wraps `tracing-subscriber` with environment-driven
//! configuration so call sites stay one line long.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crucible_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     let _guard = init_telemetry(&config).expect("failed to init telemetry");
//!
//!     // Application code; tracing events now reach the subscriber.
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CRUCIBLE_SERVICE_NAME` | `crucible` | Service name in log lines |
//! | `CRUCIBLE_LOG_LEVEL` | `info` | Level filter (also reads `RUST_LOG`) |
//! | `CRUCIBLE_JSON_LOGS` | `false` | JSON output (auto-on in containers) |
//! | `CRUCIBLE_LOG_TARGETS` | `true` | Include module paths in output |

#![warn(missing_docs)]

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::LoggingGuard;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The global subscriber could not be installed.
    #[error("failed to install tracing subscriber: {0}")]
    SubscriberInit(String),

    /// The configuration was rejected.
    #[error("invalid telemetry configuration: {0}")]
    Config(String),
}

/// Initialize structured logging.
///
/// Returns a guard that should be held for the lifetime of the
/// application.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<LoggingGuard, TelemetryError> {
    logging::init_logging(config)
}

/// Crate version, for diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
