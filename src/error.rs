//! Startup errors. Per-cycle failures are [`crate::pinger::PingOutcome`] values instead.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum KeepAliveError {
    #[error("HTTP client unavailable: {0}")]
    ClientUnavailable(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    #[error("Failed to start metrics exporter: {0}")]
    Metrics(String),

    #[error("Failed to register signal handler: {0}")]
    Signal(#[from] std::io::Error),
}

impl KeepAliveError {
    /// Operator-facing advice printed after the error itself.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            KeepAliveError::ClientUnavailable(_) => Some(
                "The HTTP client needs the system TLS library and CA certificates. \
                 Install them (e.g. `apt install libssl3 ca-certificates`) and retry.",
            ),
            KeepAliveError::Config(_) => {
                Some("Fix the configuration file or command-line flags and retry.")
            }
            _ => None,
        }
    }

    /// Process exit code for a startup failure.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// The diagnostic printed to stderr before exiting.
    pub fn report(&self) -> String {
        match self.hint() {
            Some(hint) => format!("Error: {}\n{}", self, hint),
            None => format!("Error: {}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationError;

    #[test]
    fn test_client_unavailable_report() {
        let err = KeepAliveError::ClientUnavailable("no TLS backend".into());

        assert_ne!(err.exit_code(), 0);
        assert_eq!(
            err.report().lines().collect::<Vec<_>>(),
            [
                "Error: HTTP client unavailable: no TLS backend",
                "The HTTP client needs the system TLS library and CA certificates. \
                 Install them (e.g. `apt install libssl3 ca-certificates`) and retry.",
            ]
        );
    }

    #[test]
    fn test_config_report_has_hint() {
        let err = KeepAliveError::Config(ConfigError::Validation(vec![ValidationError::ZeroInterval]));
        let report = err.report();
        assert!(report.starts_with(
            "Error: Invalid configuration: Validation failed: schedule.interval_secs must be greater than zero\n"
        ));
        assert!(report.ends_with("Fix the configuration file or command-line flags and retry."));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_report_without_hint_is_one_line() {
        let err = KeepAliveError::Metrics("address in use".into());
        assert_eq!(err.report(), "Error: Failed to start metrics exporter: address in use");
    }
}
