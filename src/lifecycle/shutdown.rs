//! Shutdown coordination for the pinger.

use tokio::sync::broadcast;

/// Coordinator for graceful shutdown.
///
/// Provides a broadcast channel that the ping loop subscribes to.
pub struct Shutdown {
    /// Broadcast channel sender.
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

const RULE_WIDTH: usize = 60;

/// Banner printed once the loop has stopped.
pub fn shutdown_banner() -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("\n\n{rule}\nKeep-Alive stopped by user\n{rule}")
}
