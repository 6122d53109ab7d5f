//! Core TOML config loading: read from path or platform default.

use std::io::ErrorKind;
use std::path::Path;

use chorus_common::ConfigError;
use tracing::info;

use crate::schema::ChorusConfig;

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. The result is not validated
/// here; callers run [`crate::validation::validate`].
pub fn load_from_path(path: &Path) -> Result<ChorusConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config: ChorusConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/chorus/config.toml`
/// On Linux: `~/.config/chorus/config.toml`
///
/// If the file does not exist, writes a documented default and returns
/// defaults.
pub fn load_default() -> Result<ChorusConfig, ConfigError> {
    let path = default_config_path()?;
    load_or_create(&path)
}

pub(super) fn load_or_create(path: &Path) -> Result<ChorusConfig, ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(path)?;
            Ok(ChorusConfig::default())
        }
        Err(e) => Err(e),
    }
}
