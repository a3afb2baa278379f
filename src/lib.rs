//! Keep-alive pinger library.
//!
//! Periodically GETs a fixed URL so a hosted web application is never
//! suspended for inactivity.

pub mod cli;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod observability;
pub mod pinger;

pub use config::PingerConfig;
pub use error::KeepAliveError;
pub use lifecycle::Shutdown;
pub use pinger::{PingOutcome, Pinger};
