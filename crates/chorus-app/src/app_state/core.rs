//! ChorusApp struct definition and constructor.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use chorus_config::schema::ChorusConfig;
use chorus_layout::{LayoutManager, ResizeDebouncer};
use chorus_webview::WebViewHandle;

use super::types::RelayoutWaker;
use super::webview_bridge::WryContainer;

/// Top-level application state.
pub struct ChorusApp {
    pub(super) config: ChorusConfig,
    pub(super) waker: RelayoutWaker,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Provider panes; created with the window
    pub(super) layout: Option<LayoutManager<WryContainer>>,

    // Prompt bar pinned below the panes
    pub(super) chrome: Option<WebViewHandle>,

    // Resize coalescing and the runtime its timers run on
    pub(super) debouncer: Option<ResizeDebouncer>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    /// Latest document title per view id.
    pub(super) page_titles: HashMap<u32, String>,

    // Whether the app should exit
    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl ChorusApp {
    pub fn new(config: ChorusConfig, waker: RelayoutWaker) -> Self {
        Self {
            config,
            waker,
            window: None,
            layout: None,
            chrome: None,
            debouncer: None,
            tokio_runtime: None,
            page_titles: HashMap::new(),
            should_exit: false,
            last_poll: Instant::now(),
        }
    }

    pub(super) fn pane_count(&self) -> usize {
        self.layout.as_ref().map_or(0, |l| l.pane_count())
    }
}

#[cfg(test)]
pub(super) fn test_app() -> ChorusApp {
    ChorusApp::new(ChorusConfig::default(), Arc::new(|| {}))
}
