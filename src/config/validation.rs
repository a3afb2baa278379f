//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (interval and timeout > 0)
//! - Check the target forms a usable absolute http(s) URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: PingerConfig → Result<(), Vec<ValidationError>>
//! - Runs before the pinger is started

use url::Url;

use crate::config::schema::PingerConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("target.base_url {url:?} is not a valid URL: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("target.base_url {0:?} must use http or https")]
    UnsupportedScheme(String),

    #[error("target.endpoint {0:?} must start with '/'")]
    EndpointNotAbsolute(String),

    #[error("target.timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("schedule.interval_secs must be greater than zero")]
    ZeroInterval,

    #[error("observability.metrics_address {0:?} is not a socket address")]
    InvalidMetricsAddress(String),
}

pub fn validate_config(config: &PingerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let target = &config.target;

    match Url::parse(&target.base_url) {
        Ok(url) if url.scheme() != "http" && url.scheme() != "https" => {
            errors.push(ValidationError::UnsupportedScheme(target.base_url.clone()));
        }
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::InvalidBaseUrl {
            url: target.base_url.clone(),
            reason: e.to_string(),
        }),
    }

    if !target.endpoint.is_empty() && !target.endpoint.starts_with('/') {
        errors.push(ValidationError::EndpointNotAbsolute(target.endpoint.clone()));
    }

    if target.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.schedule.interval_secs == 0 {
        errors.push(ValidationError::ZeroInterval);
    }

    if config.observability.metrics_socket().is_err() {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
