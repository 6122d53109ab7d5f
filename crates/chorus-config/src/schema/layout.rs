//! Pane layout configuration.

use serde::{Deserialize, Serialize};

/// Pane tiling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Pixels kept free at the bottom of the window for the prompt bar
    /// (valid range: 0-2000).
    pub reserved_chrome_height: u32,
    /// Zoom factor applied to every new pane (valid range: 0.25-5.0).
    pub default_zoom: f64,
    /// Quiet period after the last resize before panes are re-tiled
    /// (valid range: 0-5000).
    pub resize_debounce_ms: u32,
    /// Maximum number of panes open at once (valid range: 1-12).
    pub max_panes: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            reserved_chrome_height: 160,
            default_zoom: 1.0,
            resize_debounce_ms: 150,
            max_panes: 6,
        }
    }
}
