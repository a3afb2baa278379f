//! Metrics collection and exposition.
//!
//! # Metrics
//! - `keepalive_pings_total` (counter): pings by outcome
//! - `keepalive_ping_duration_seconds` (histogram): request latency
//! - `keepalive_last_success_timestamp_seconds` (gauge): unix time of the last 200
//!
//! Without an installed recorder every call here is a no-op.

use std::net::SocketAddr;
use std::time::Duration;

use ::metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::error::KeepAliveError;
use crate::pinger::PingOutcome;

/// Install the Prometheus recorder and its HTTP scrape listener.
///
/// Must be called from within the Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), KeepAliveError> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| KeepAliveError::Metrics(e.to_string()))?;

    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_ping(outcome: &PingOutcome, elapsed: Duration) {
    counter!("keepalive_pings_total", "outcome" => outcome.label()).increment(1);
    histogram!("keepalive_ping_duration_seconds").record(elapsed.as_secs_f64());

    if outcome.is_success() {
        gauge!("keepalive_last_success_timestamp_seconds")
            .set(chrono::Utc::now().timestamp() as f64);
    }
}
