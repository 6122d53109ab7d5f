//! Layout engine types and configuration.

/// Smallest page zoom a pane accepts.
pub const MIN_ZOOM: f64 = 0.25;
/// Largest page zoom a pane accepts.
pub const MAX_ZOOM: f64 = 5.0;

/// Configuration for the layout engine that computes pane positions.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEngine {
    /// Height in pixels kept free below the panes for the prompt chrome.
    pub reserved_chrome_height: u32,
    /// Zoom factor applied to every newly created pane.
    pub default_zoom: f64,
    /// Upper bound on simultaneously open panes.
    pub max_panes: usize,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            reserved_chrome_height: 160,
            default_zoom: 1.0,
            max_panes: 6,
        }
    }
}
