//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::PingerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a TOML file into a config without validating it.
pub fn read_config(path: &Path) -> Result<PingerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Build the effective configuration: defaults, then the file (if any), then
/// `overrides`, and only then validate the result.
pub fn load_config(
    path: Option<&Path>,
    overrides: impl FnOnce(&mut PingerConfig),
) -> Result<PingerConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => PingerConfig::default(),
    };
    overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
