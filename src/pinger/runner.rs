//! The ping loop.
//!
//! # Cycle
//! ```text
//! cycle 0: ping → classify → log
//! cycle N: sleep(interval) → ping → classify → log
//! ```
//!
//! The sleep starts once the previous ping has finished, so the real period
//! is `interval + request latency`. Shutdown is observed both while a
//! request is in flight and while sleeping.

use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::{self, Instant};

use crate::config::PingerConfig;
use crate::error::KeepAliveError;
use crate::observability::metrics;
use crate::pinger::outcome::PingOutcome;
use crate::pinger::probe::{HttpProbe, Probe};

pub struct Pinger<P = HttpProbe> {
    url: String,
    interval: Duration,
    probe: P,
}

impl Pinger<HttpProbe> {
    /// Build a pinger backed by a real HTTP client.
    ///
    /// Fails with [`KeepAliveError::ClientUnavailable`] before any network
    /// activity if the client cannot be constructed.
    pub fn from_config(config: &PingerConfig) -> Result<Self, KeepAliveError> {
        let probe = HttpProbe::new(config.target.timeout())?;
        Ok(Self::with_probe(config.url(), config.schedule.interval(), probe))
    }
}

impl<P: Probe> Pinger<P> {
    pub fn with_probe(url: impl Into<String>, interval: Duration, probe: P) -> Self {
        Self {
            url: url.into(),
            interval,
            probe,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Perform one ping and log its outcome.
    pub async fn ping_once(&self) -> PingOutcome {
        let started = Instant::now();
        let outcome = self.probe.probe(&self.url).await;
        let elapsed = started.elapsed();

        let latency_ms = elapsed.as_millis() as u64;
        match &outcome {
            PingOutcome::Success(_) => {
                tracing::info!(latency_ms, "Pinging {}... {}", self.url, outcome);
            }
            PingOutcome::UnexpectedStatus(_) => {
                tracing::warn!(latency_ms, "Pinging {}... {}", self.url, outcome);
            }
            PingOutcome::Timeout | PingOutcome::ConnectionFailure | PingOutcome::OtherError(_) => {
                tracing::error!(latency_ms, "Pinging {}... {}", self.url, outcome);
            }
        }

        metrics::record_ping(&outcome, elapsed);
        outcome
    }

    /// Ping immediately, then every `interval`, until shutdown is signalled.
    ///
    /// A closed shutdown channel is treated the same as a signal.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            url = %self.url,
            interval_secs = self.interval.as_secs(),
            "Pinger starting"
        );

        loop {
            tokio::select! {
                biased;
                _ = shutdown.recv() => {
                    tracing::info!("Pinger received shutdown signal during request");
                    break;
                }
                _ = self.ping_once() => {}
            }

            tokio::select! {
                biased;
                _ = shutdown.recv() => {
                    tracing::info!("Pinger received shutdown signal, exiting loop");
                    break;
                }
                _ = time::sleep(self.interval) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Scripted {
        outcomes: Vec<PingOutcome>,
        calls: Arc<AtomicUsize>,
    }

    impl Probe for Scripted {
        async fn probe(&self, _url: &str) -> PingOutcome {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcomes[n % self.outcomes.len()].clone()
        }
    }

    #[tokio::test]
    async fn test_ping_once_returns_probe_outcome() {
        let calls = Arc::new(AtomicUsize::new(0));
        let pinger = Pinger::with_probe(
            "http://example.test/api",
            Duration::from_secs(600),
            Scripted {
                outcomes: vec![PingOutcome::UnexpectedStatus(503)],
                calls: calls.clone(),
            },
        );

        assert_eq!(pinger.ping_once().await, PingOutcome::UnexpectedStatus(503));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failures_do_not_stop_the_loop() {
        let calls = Arc::new(AtomicUsize::new(0));
        let pinger = Pinger::with_probe(
            "http://example.test/api",
            Duration::from_secs(600),
            Scripted {
                outcomes: vec![
                    PingOutcome::Timeout,
                    PingOutcome::ConnectionFailure,
                    PingOutcome::OtherError("boom".into()),
                    PingOutcome::UnexpectedStatus(500),
                ],
                calls: calls.clone(),
            },
        );

        let (tx, rx) = broadcast::channel(1);
        let handle = tokio::spawn(pinger.run(rx));

        time::sleep(Duration::from_secs(600 * 5 + 1)).await;
        tx.send(()).unwrap();
        handle.await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 6);
    }

    #[tokio::test]
    async fn test_signal_before_start_means_no_ping() {
        let calls = Arc::new(AtomicUsize::new(0));
        let pinger = Pinger::with_probe(
            "http://example.test/api",
            Duration::from_secs(600),
            Scripted {
                outcomes: vec![PingOutcome::Success(200)],
                calls: calls.clone(),
            },
        );

        let (tx, rx) = broadcast::channel(1);
        tx.send(()).unwrap();
        pinger.run(rx).await;

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
