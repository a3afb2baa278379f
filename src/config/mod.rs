//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → cli.rs (command-line / env overrides)
//!     → validation.rs (semantic checks)
//!     → PingerConfig (validated, immutable)
//!     → moved into the pinger at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All fields have defaults so the binary runs with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, read_config, ConfigError};
pub use schema::{LogFormat, ObservabilityConfig, PingerConfig, ScheduleConfig, TargetConfig};
pub use validation::{validate_config, ValidationError};
