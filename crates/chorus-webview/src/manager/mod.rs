//! WebView lifecycle management.
//!
//! `WebViewManager` builds `wry::WebView` instances as children of the
//! host window and collects the events they raise.

use std::sync::{Arc, Mutex};

use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::{ViewRole, WebViewConfig};

/// Builds WebViews and owns the event queue they all report into.
pub struct WebViewManager {
    /// Event sink; drained by the main event loop.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    /// Id given to the next view built.
    next_view_id: u32,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            next_view_id: 1,
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub(crate) fn allocate_view_id(&mut self) -> u32 {
        let id = self.next_view_id;
        self.next_view_id += 1;
        id
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}
