//! The host window as a layout `Container`.

use std::sync::Arc;

use tracing::warn;
use winit::dpi::LogicalSize;
use winit::window::Window;

use chorus_common::types::{Rect, Size};
use chorus_layout::{Container, ViewPreferences};
use chorus_webview::{WebViewConfig, WebViewEvent, WebViewHandle, WebViewManager};

use super::bounds::layout_rect_to_wry;

/// Builds provider views as children of the main window.
///
/// Views are created hidden and shown on attach, so a pane never flashes
/// at its creation bounds before the first layout pass.
pub struct WryContainer {
    window: Arc<Window>,
    webviews: WebViewManager,
}

impl WryContainer {
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            webviews: WebViewManager::new(),
        }
    }

    /// Build the prompt bar view at `bounds`.
    pub fn create_chrome(
        &mut self,
        bounds: Rect,
        prefs: &ViewPreferences,
    ) -> Result<WebViewHandle, wry::Error> {
        let config = WebViewConfig {
            devtools: prefs.devtools,
            clipboard: true,
            ..WebViewConfig::chrome()
        };
        self.webviews
            .create(self.window.as_ref(), layout_rect_to_wry(&bounds), config)
    }

    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        self.webviews.drain_events()
    }
}

impl Container for WryContainer {
    type View = WebViewHandle;
    type Error = wry::Error;

    fn create_view(
        &mut self,
        url: &str,
        prefs: &ViewPreferences,
    ) -> Result<WebViewHandle, wry::Error> {
        let config = WebViewConfig {
            user_agent: prefs.user_agent.clone(),
            devtools: prefs.devtools,
            clipboard: prefs.clipboard,
            autoplay: prefs.autoplay,
            ..WebViewConfig::pane(url)
        };
        self.webviews
            .create(self.window.as_ref(), wry::Rect::default(), config)
    }

    fn attach(&mut self, view: &WebViewHandle) {
        if let Err(e) = view.set_visible(true) {
            warn!(view_id = view.view_id(), error = %e, "Failed to show webview");
        }
    }

    fn detach(&mut self, view: &WebViewHandle) {
        if let Err(e) = view.set_visible(false) {
            warn!(view_id = view.view_id(), error = %e, "Failed to hide webview");
        }
    }

    fn container_size(&self) -> Size {
        let logical: LogicalSize<f64> = self
            .window
            .inner_size()
            .to_logical(self.window.scale_factor());
        Size::new(logical.width as u32, logical.height as u32)
    }

    fn set_bounds(&mut self, view: &WebViewHandle, bounds: Rect) -> Result<(), wry::Error> {
        view.set_bounds(layout_rect_to_wry(&bounds))
    }

    fn set_zoom(&mut self, view: &WebViewHandle, factor: f64) -> Result<(), wry::Error> {
        view.zoom(factor)
    }

    fn load_address(&mut self, view: &WebViewHandle, url: &str) -> Result<(), wry::Error> {
        view.load_url(url)
    }
}
