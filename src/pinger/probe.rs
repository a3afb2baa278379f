//! Outbound HTTP probe.
//!
//! # Responsibilities
//! - Own the single HTTP client used for every cycle
//! - Issue one bounded GET and classify the result
//!
//! # Design Decisions
//! - The client is built once at startup; failure to build it is the
//!   "HTTP capability unavailable" condition and is fatal
//! - Timeouts are enforced by the client, so a probe can never hang

use std::future::Future;
use std::time::Duration;

use crate::error::KeepAliveError;
use crate::pinger::outcome::{error_chain, PingOutcome};

const USER_AGENT: &str = concat!("keep-alive/", env!("CARGO_PKG_VERSION"));

/// Something that can ping a URL and classify what happened.
///
/// Implementations must not fail: every error is folded into a [`PingOutcome`].
pub trait Probe {
    fn probe(&self, url: &str) -> impl Future<Output = PingOutcome> + Send;
}

/// `reqwest`-backed probe.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    /// Build the HTTP client. No network activity happens here.
    pub fn new(timeout: Duration) -> Result<Self, KeepAliveError> {
        Self::from_builder(reqwest::Client::builder().user_agent(USER_AGENT), timeout)
    }

    /// Finish a caller-prepared client builder, enforcing the request timeout.
    pub fn from_builder(builder: reqwest::ClientBuilder, timeout: Duration) -> Result<Self, KeepAliveError> {
        let client = builder
            .timeout(timeout)
            .build()
            .map_err(|e| KeepAliveError::ClientUnavailable(error_chain(&e)))?;

        Ok(Self { client })
    }
}

impl Probe for HttpProbe {
    async fn probe(&self, url: &str) -> PingOutcome {
        match self.client.get(url).send().await {
            Ok(response) => PingOutcome::from_status(response.status().as_u16()),
            Err(e) => {
                tracing::debug!(url = %url, error = ?e, "Ping request failed");
                PingOutcome::from_error(&e)
            }
        }
    }
}
