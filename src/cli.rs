//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{load_config, ConfigError, LogFormat, PingerConfig};

#[derive(Debug, Parser)]
#[command(name = "keep-alive")]
#[command(version, about = "Pings a hosted web app on a fixed interval so it never idles out", long_about = None)]
pub struct Cli {
    /// TOML configuration file. Defaults are used when omitted.
    #[arg(short, long, env = "KEEPALIVE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base URL of the application to keep awake.
    #[arg(short, long, env = "KEEPALIVE_URL")]
    pub url: Option<String>,

    /// Endpoint path appended to the base URL.
    #[arg(short, long, env = "KEEPALIVE_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Seconds between pings.
    #[arg(short, long, env = "KEEPALIVE_INTERVAL")]
    pub interval: Option<u64>,

    /// Request timeout in seconds.
    #[arg(short, long, env = "KEEPALIVE_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit JSON log lines.
    #[arg(long)]
    pub json_logs: bool,

    /// Serve Prometheus metrics on this address.
    #[arg(long)]
    pub metrics_address: Option<String>,

    /// Ping once and exit.
    #[arg(long)]
    pub once: bool,
}

impl Cli {
    /// Apply command-line overrides on top of a file (or default) config.
    pub fn apply(&self, config: &mut PingerConfig) {
        if let Some(url) = &self.url {
            config.target.base_url = url.clone();
        }
        if let Some(endpoint) = &self.endpoint {
            config.target.endpoint = endpoint.clone();
        }
        if let Some(interval) = self.interval {
            config.schedule.interval_secs = interval;
        }
        if let Some(timeout) = self.timeout {
            config.target.timeout_secs = timeout;
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
        if self.json_logs {
            config.observability.log_format = LogFormat::Json;
        }
        if let Some(addr) = &self.metrics_address {
            config.observability.metrics_enabled = true;
            config.observability.metrics_address = addr.clone();
        }
    }

    /// Read the config file if given, apply overrides, then validate.
    pub fn load_config(&self) -> Result<PingerConfig, ConfigError> {
        load_config(self.config.as_deref(), |config| self.apply(config))
    }
}
