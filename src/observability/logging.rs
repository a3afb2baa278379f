//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the global tracing subscriber
//! - Timestamp every line as `YYYY-MM-DD HH:MM:SS` local time
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Pretty format by default, JSON when configured
//! - `RUST_LOG` overrides the configured level

use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, ObservabilityConfig};
use crate::error::KeepAliveError;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(config: &ObservabilityConfig) -> String {
    format!("keep_alive={},reqwest=warn", config.log_level)
}

pub fn init_logging(config: &ObservabilityConfig) -> Result<(), KeepAliveError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter(config)))
        .map_err(|e| KeepAliveError::Logging(e.to_string()))?;

    let (pretty, json) = match config.log_format {
        LogFormat::Pretty => (
            Some(
                tracing_subscriber::fmt::layer()
                    .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
                    .with_target(false),
            ),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string())),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .try_init()
        .map_err(|e| KeepAliveError::Logging(e.to_string()))
}
