//! Chorus configuration system.
//!
//! TOML-based configuration with validation. Every section uses serde
//! defaults so a partial file (or no file at all) works out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use chorus_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ChorusConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use chorus_common::ConfigError;

/// Load config from the platform default path, creating a documented
/// default file on first run, and validate the result.
pub fn load_config() -> Result<ChorusConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path (the `--config` flag).
///
/// Unlike [`load_config`], a missing file is an error here: the user
/// asked for that file specifically.
pub fn load_config_from(path: &Path) -> Result<ChorusConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ChorusConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
