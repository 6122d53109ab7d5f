use std::sync::Arc;

use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::assets;
use crate::ipc::{IPC_INIT_SCRIPT, PROMPT_RECEIVER_SCRIPT};

use super::handle::WebViewHandle;
use super::types::{ViewRole, WebViewConfig};
use super::WebViewManager;

impl WebViewManager {
    /// Create a new WebView as a child of the given window, positioned at
    /// `bounds`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let view_id = self.allocate_view_id();
        let events = Arc::clone(&self.events);
        let role = config.role;

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_visible(config.visible)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_focused(role == ViewRole::Chrome)
            .with_initialization_script(IPC_INIT_SCRIPT);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = match role {
            ViewRole::Pane => builder.with_initialization_script(PROMPT_RECEIVER_SCRIPT),
            ViewRole::Chrome => builder.with_custom_protocol(
                assets::CHROME_SCHEME.to_string(),
                |_wv_id, request| assets::respond(&request.uri().to_string()),
            ),
        };

        builder = Self::attach_ipc_handler(builder, Arc::clone(&events), view_id);
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events), view_id);
        builder = Self::attach_title_handler(builder, Arc::clone(&events), view_id);
        builder = Self::attach_navigation_handler(builder, events, view_id, role);

        let webview = builder.with_url(&config.url).build_as_child(window)?;

        debug!(view_id, ?role, url = %config.url, "WebView created");

        Ok(WebViewHandle { webview, view_id })
    }
}
