//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the pinger.
//! All types derive Serde traits for deserialization from config files.

use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the keep-alive pinger.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct PingerConfig {
    /// The URL being kept awake.
    pub target: TargetConfig,

    /// Ping cadence.
    pub schedule: ScheduleConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl PingerConfig {
    /// Full request URL: base URL followed by the endpoint path.
    pub fn url(&self) -> String {
        self.target.url()
    }
}

/// Target configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TargetConfig {
    /// Base URL of the hosted application (e.g., "https://app.onrender.com").
    pub base_url: String,

    /// Endpoint path appended to the base URL (e.g., "/api/photos").
    pub endpoint: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl TargetConfig {
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.endpoint)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: "https://hwb-votes.onrender.com".to_string(),
            endpoint: "/api/photos".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Schedule configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Seconds to sleep between pings. Must stay below the host's sleep threshold.
    pub interval_secs: u64,
}

impl ScheduleConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            // 10 minutes, under the 15 minute idle threshold
            interval_secs: 600,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Human-readable lines or JSON objects.
    pub log_format: LogFormat,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl ObservabilityConfig {
    /// The scrape listener address, or `None` when metrics are disabled.
    pub fn metrics_socket(&self) -> Result<Option<SocketAddr>, AddrParseError> {
        if !self.metrics_enabled {
            return Ok(None);
        }
        self.metrics_address.parse().map(Some)
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
