//! Keep-alive pinger subsystem.
//!
//! # Data Flow
//! ```text
//! runner.rs (loop + schedule)
//!     → probe.rs (one GET, bounded by timeout)
//!     → outcome.rs (classify: success / warning / timeout / connect / other)
//!     → log line + metrics
//!     → sleep, repeat
//! ```
//!
//! # Design Decisions
//! - Strictly sequential: one request at a time, never overlapping cycles
//! - Every failure is a value, not an error; nothing in a cycle is fatal
//! - No retry inside a cycle; the next cycle is the retry
//! - No state survives a cycle

pub mod outcome;
pub mod probe;
pub mod runner;

pub use outcome::PingOutcome;
pub use probe::{HttpProbe, Probe};
pub use runner::Pinger;
