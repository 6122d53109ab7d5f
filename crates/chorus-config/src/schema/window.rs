//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Top-level window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 320-16384).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 240-16384).
    pub height: u32,
    pub start_fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Chorus".into(),
            width: 1600,
            height: 1000,
            start_fullscreen: false,
        }
    }
}
