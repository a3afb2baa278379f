//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the HTTP client (the one hard precondition)
//! - Print the startup banner
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal and happens before network activity

use crate::config::PingerConfig;
use crate::error::KeepAliveError;
use crate::pinger::{HttpProbe, Pinger};

const RULE_WIDTH: usize = 60;

/// Construct the pinger, verifying the HTTP client can be built.
pub fn build_pinger(config: &PingerConfig) -> Result<Pinger<HttpProbe>, KeepAliveError> {
    let pinger = Pinger::from_config(config)?;
    tracing::debug!(url = %pinger.url(), "HTTP client ready");
    Ok(pinger)
}

/// Banner printed before the first ping.
pub fn startup_banner(config: &PingerConfig) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let interval = config.schedule.interval_secs;
    let minutes = interval as f64 / 60.0;
    format!(
        "{rule}\n\
         Keep-Alive Pinger v{version}\n\
         {rule}\n\
         Target URL: {base}\n\
         Ping Interval: {interval} seconds ({minutes:.1} minutes)\n\
         Endpoint: {endpoint}\n\
         {rule}\n\
         \n\
         Press Ctrl+C to stop\n",
        version = env!("CARGO_PKG_VERSION"),
        base = config.target.base_url,
        endpoint = config.target.endpoint,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_banner_lists_target() {
        let banner = startup_banner(&PingerConfig::default());
        assert!(banner.contains("Target URL: https://hwb-votes.onrender.com\n"));
        assert!(banner.contains("Ping Interval: 600 seconds (10.0 minutes)\n"));
        assert!(banner.contains("Endpoint: /api/photos\n"));
        assert!(banner.contains("Press Ctrl+C to stop"));
    }

    #[test]
    fn test_fractional_minutes() {
        let mut config = PingerConfig::default();
        config.schedule.interval_secs = 90;
        assert!(startup_banner(&config).contains("90 seconds (1.5 minutes)"));
    }

    #[test]
    fn test_build_pinger_does_not_touch_network() {
        let mut config = PingerConfig::default();
        config.target.base_url = "http://192.0.2.1".into();
        let pinger = build_pinger(&config).unwrap();
        assert_eq!(pinger.url(), "http://192.0.2.1/api/photos");
    }
}
