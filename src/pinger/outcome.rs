//! Classification of a single ping attempt.

use std::error::Error;
use std::fmt;

/// Result of one ping. Produced once per cycle, logged, then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PingOutcome {
    /// The target answered 200.
    Success(u16),
    /// The target answered with any other status.
    UnexpectedStatus(u16),
    /// No response within the configured timeout.
    Timeout,
    /// The transport could not be established.
    ConnectionFailure,
    /// Anything else the HTTP client reported.
    OtherError(String),
}

impl PingOutcome {
    /// Classify a received status code.
    pub fn from_status(status: u16) -> Self {
        if status == 200 {
            PingOutcome::Success(status)
        } else {
            PingOutcome::UnexpectedStatus(status)
        }
    }

    /// Classify a client-side failure.
    pub fn from_error(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            PingOutcome::Timeout
        } else if err.is_connect() {
            PingOutcome::ConnectionFailure
        } else {
            PingOutcome::OtherError(error_chain(err))
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PingOutcome::Success(_))
    }

    /// Stable label used for metrics and structured log fields.
    pub fn label(&self) -> &'static str {
        match self {
            PingOutcome::Success(_) => "success",
            PingOutcome::UnexpectedStatus(_) => "unexpected_status",
            PingOutcome::Timeout => "timeout",
            PingOutcome::ConnectionFailure => "connection_failure",
            PingOutcome::OtherError(_) => "error",
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            PingOutcome::Success(status) | PingOutcome::UnexpectedStatus(status) => Some(*status),
            _ => None,
        }
    }
}

/// Render an error followed by its `source()` causes, `outer: inner: root`.
///
/// A cause whose text is already part of the message so far is skipped.
pub fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

impl fmt::Display for PingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PingOutcome::Success(status) => write!(f, "✓ Success (Status: {})", status),
            PingOutcome::UnexpectedStatus(status) => write!(f, "⚠ Warning (Status: {})", status),
            PingOutcome::Timeout => write!(f, "✗ Timeout"),
            PingOutcome::ConnectionFailure => write!(f, "✗ Connection Error"),
            PingOutcome::OtherError(message) => write!(f, "✗ Error: {}", message),
        }
    }
}
