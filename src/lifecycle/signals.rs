//! OS signal handling.
//!
//! # Responsibilities
//! - Register SIGINT and SIGTERM handlers (Ctrl+C on Windows)
//! - Resolve once, when the first of them arrives
//!
//! # Design Decisions
//! - Handlers are registered eagerly in [`ShutdownSignal::register`], before
//!   config loading and the first ping, so a signal can never take the
//!   default action and kill the process without the shutdown banner
//! - Uses Tokio's signal handling (async-safe)

#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};
#[cfg(windows)]
use tokio::signal::windows::{ctrl_c, CtrlC};

pub struct ShutdownSignal {
    #[cfg(unix)]
    interrupt: Signal,
    #[cfg(unix)]
    terminate: Signal,
    #[cfg(windows)]
    ctrl_c: CtrlC,
}

impl ShutdownSignal {
    #[cfg(unix)]
    pub fn register() -> std::io::Result<Self> {
        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        })
    }

    #[cfg(windows)]
    pub fn register() -> std::io::Result<Self> {
        Ok(Self { ctrl_c: ctrl_c()? })
    }

    /// Wait for the first shutdown signal and return its name.
    #[cfg(unix)]
    pub async fn recv(&mut self) -> &'static str {
        tokio::select! {
            _ = self.interrupt.recv() => "SIGINT",
            _ = self.terminate.recv() => "SIGTERM",
        }
    }

    #[cfg(windows)]
    pub async fn recv(&mut self) -> &'static str {
        self.ctrl_c.recv().await;
        "Ctrl+C"
    }
}
