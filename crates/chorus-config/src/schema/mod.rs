//! Configuration schema types for Chorus.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod layout;
mod logging;
mod providers;
mod webview;
mod window;

pub use layout::*;
pub use logging::*;
pub use providers::*;
pub use webview::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Chorus.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChorusConfig {
    pub layout: LayoutConfig,
    pub window: WindowConfig,
    pub webview: WebViewSettings,
    pub providers: ProvidersConfig,
    pub logging: LoggingConfig,
}
