//! Where the config file lives, and writing the documented default there.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chorus_common::ConfigError;
use tracing::{debug, info};

use super::template::default_config_toml;

const APP_DIR: &str = "chorus";
const CONFIG_FILE: &str = "config.toml";

/// `<base>/chorus/config.toml`.
pub fn config_path_in(base: &Path) -> PathBuf {
    base.join(APP_DIR).join(CONFIG_FILE)
}

/// The config file under the platform config directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| config_path_in(&dir))
        .ok_or_else(|| ConfigError::WriteError("could not determine config directory".into()))
}

/// Write the documented default config to `path`.
///
/// An existing file is left alone: the user's config always wins over the
/// template, even when two instances start at once.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_error = |what: &str, e: std::io::Error| {
        ConfigError::WriteError(format!("{what} {}: {e}", path.display()))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| write_error("failed to create directory for", e))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!(path = %path.display(), "config already exists, template not written");
            return Ok(());
        }
        Err(e) => return Err(write_error("failed to create", e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(|e| write_error("failed to write", e))?;

    info!(path = %path.display(), "created default config");
    Ok(())
}
