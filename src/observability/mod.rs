//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Pinger produces:
//!     → logging.rs (one timestamped line per cycle, plus lifecycle events)
//!     → metrics.rs (outcome counters, latency histogram)
//!
//! Consumers:
//!     → Console (stdout)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Per-cycle line level follows the outcome: info / warn / error
//! - Metrics are opt-in; the loop itself keeps no counters

pub mod logging;
pub mod metrics;
