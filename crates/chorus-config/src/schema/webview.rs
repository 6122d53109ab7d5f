//! Embedded browser view settings.

use serde::{Deserialize, Serialize};

/// Settings applied to every provider view at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewSettings {
    /// Custom user agent; the platform default is used when unset.
    pub user_agent: Option<String>,
    /// Allow opening the web inspector.
    pub devtools: bool,
    pub clipboard: bool,
    /// Let media play without a user gesture.
    pub autoplay: bool,
}

impl Default for WebViewSettings {
    fn default() -> Self {
        Self {
            user_agent: None,
            devtools: cfg!(debug_assertions),
            clipboard: true,
            autoplay: false,
        }
    }
}
