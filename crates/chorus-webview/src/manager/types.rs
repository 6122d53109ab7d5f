/// What a view is for. Decides its navigation allowlist and which
/// scripts are injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewRole {
    /// A provider chat site.
    Pane,
    /// The bundled prompt bar.
    Chrome,
}

/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    pub role: ViewRole,
    /// Initial URL to load.
    pub url: String,
    /// Custom user agent string; platform default when `None`.
    pub user_agent: Option<String>,
    pub devtools: bool,
    pub clipboard: bool,
    /// Whether media may autoplay.
    pub autoplay: bool,
    /// Whether the view is shown as soon as it is built.
    pub visible: bool,
}

impl WebViewConfig {
    /// A provider pane loading `url`.
    pub fn pane(url: impl Into<String>) -> Self {
        Self {
            role: ViewRole::Pane,
            url: url.into(),
            user_agent: None,
            devtools: cfg!(debug_assertions),
            clipboard: true,
            autoplay: false,
            visible: false,
        }
    }

    /// The prompt bar, served from the bundled assets.
    pub fn chrome() -> Self {
        Self {
            role: ViewRole::Chrome,
            url: crate::assets::chrome_url().to_string(),
            user_agent: None,
            devtools: cfg!(debug_assertions),
            clipboard: true,
            autoplay: false,
            visible: true,
        }
    }
}
