//! The host-window boundary the layout manager drives.

use std::fmt;

use chorus_common::types::{Rect, Size};

/// Preferences handed to the container for every new view.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewPreferences {
    /// Custom user agent string. `None` keeps the engine default.
    pub user_agent: Option<String>,
    /// Whether to enable dev tools.
    pub devtools: bool,
    /// Whether to enable clipboard access.
    pub clipboard: bool,
    /// Whether to enable autoplay for media.
    pub autoplay: bool,
}

impl Default for ViewPreferences {
    fn default() -> Self {
        Self {
            user_agent: None,
            devtools: cfg!(debug_assertions),
            clipboard: true,
            autoplay: false,
        }
    }
}

/// A window that can host embedded views.
///
/// Implementations own the native resources; the layout manager only ever
/// holds the `View` values the container hands back and passes them in by
/// reference. Dropping a `View` must release it.
pub trait Container {
    type View;
    type Error: fmt::Display;

    /// Create a new view showing `url`. May fail; nothing is registered then.
    fn create_view(&mut self, url: &str, prefs: &ViewPreferences)
        -> Result<Self::View, Self::Error>;

    /// Make the view visible in the container. Idempotent.
    fn attach(&mut self, view: &Self::View);

    /// Remove the view from the visible surface. Idempotent.
    fn detach(&mut self, view: &Self::View);

    /// Current drawable size of the container.
    fn container_size(&self) -> Size;

    fn set_bounds(&mut self, view: &Self::View, bounds: Rect) -> Result<(), Self::Error>;

    fn set_zoom(&mut self, view: &Self::View, factor: f64) -> Result<(), Self::Error>;

    fn load_address(&mut self, view: &Self::View, url: &str) -> Result<(), Self::Error>;
}
