//! Window creation and subsystem setup.

use std::sync::Arc;
use std::time::Duration;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, WindowAttributes};

use chorus_config::schema::{LayoutConfig, WebViewSettings};
use chorus_layout::{LayoutEngine, LayoutManager, ResizeDebouncer, ViewPreferences};

use super::core::ChorusApp;
use super::webview_bridge::WryContainer;

// =============================================================================
// CONFIG CONVERSION
// =============================================================================

pub(super) fn layout_engine(config: &LayoutConfig) -> LayoutEngine {
    LayoutEngine {
        reserved_chrome_height: config.reserved_chrome_height,
        default_zoom: config.default_zoom,
        max_panes: config.max_panes as usize,
    }
}

pub(super) fn view_preferences(config: &WebViewSettings) -> ViewPreferences {
    ViewPreferences {
        user_agent: config.user_agent.clone(),
        devtools: config.devtools,
        clipboard: config.clipboard,
        autoplay: config.autoplay,
    }
}

// =============================================================================
// INITIALIZATION
// =============================================================================

impl ChorusApp {
    /// Create the window, the timer runtime, the layout manager and the
    /// prompt bar. Returns `false` if the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window_config = &self.config.window;
        let mut attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_inner_size(LogicalSize::new(
                f64::from(window_config.width),
                f64::from(window_config.height),
            ));
        if window_config.start_fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        if !self.initialize_runtime() {
            return false;
        }

        let container = WryContainer::new(Arc::clone(&window));
        self.layout = Some(LayoutManager::with_layout(
            container,
            layout_engine(&self.config.layout),
            view_preferences(&self.config.webview),
        ));
        self.window = Some(window);

        self.create_chrome_view();
        tracing::info!("Window created and layout manager initialized");
        true
    }

    /// Start the single-worker runtime the resize debouncer sleeps on.
    pub(super) fn initialize_runtime(&mut self) -> bool {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("chorus-timers")
            .enable_time()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                tracing::error!("Failed to start tokio runtime: {e}");
                return false;
            }
        };

        let delay = Duration::from_millis(u64::from(self.config.layout.resize_debounce_ms));
        let waker = Arc::clone(&self.waker);
        let debouncer = ResizeDebouncer::new(runtime.handle().clone(), delay, move || waker());
        tracing::debug!(delay_ms = debouncer.delay().as_millis() as u64, "Resize debouncer ready");
        self.debouncer = Some(debouncer);
        self.tokio_runtime = Some(runtime);
        true
    }

    /// Open the configured startup providers, left to right.
    pub(super) fn open_startup_providers(&mut self) {
        let urls = self.config.providers.startup.clone();
        tracing::info!(count = urls.len(), "Opening startup providers");
        for url in &urls {
            self.open_provider(url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chorus_config::schema::ChorusConfig;

    #[test]
    fn layout_config_maps_onto_engine() {
        let mut config = ChorusConfig::default();
        config.layout.reserved_chrome_height = 90;
        config.layout.default_zoom = 1.25;
        config.layout.max_panes = 4;

        let engine = layout_engine(&config.layout);
        assert_eq!(engine.reserved_chrome_height, 90);
        assert_eq!(engine.default_zoom, 1.25);
        assert_eq!(engine.max_panes, 4);
    }

    #[test]
    fn default_config_matches_engine_defaults() {
        let config = ChorusConfig::default();
        assert_eq!(layout_engine(&config.layout), LayoutEngine::default());
    }

    #[test]
    fn webview_settings_map_onto_preferences() {
        let mut config = ChorusConfig::default();
        config.webview.user_agent = Some("Chorus/0.1".into());
        config.webview.autoplay = true;

        let prefs = view_preferences(&config.webview);
        assert_eq!(prefs.user_agent.as_deref(), Some("Chorus/0.1"));
        assert!(prefs.autoplay);
        assert!(prefs.clipboard);
    }

    #[test]
    fn initialize_runtime_sets_up_debouncer() {
        let mut app = crate::app_state::core::test_app();
        assert!(app.initialize_runtime());
        let debouncer = app.debouncer.as_ref().unwrap();
        assert_eq!(debouncer.delay(), Duration::from_millis(150));
        assert!(!debouncer.is_pending());
        app.shutdown();
    }
}
