//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config validated → Build HTTP client → Banner → Start loop
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → ShutdownSignal resolves
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Broadcast to loop → Loop exits → Banner → Exit 0
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then client, then the loop
//! - The loop never awaits an in-flight request after shutdown; requests
//!   are bounded by their own timeout anyway

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::{shutdown_banner, Shutdown};
pub use signals::ShutdownSignal;
pub use startup::{build_pinger, startup_banner};
