//! WebView event types.

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded (DOMContentLoaded + resources).
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a WebView instance, keyed by the view id the
/// [`WebViewManager`](crate::WebViewManager) assigned at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebViewEvent {
    PageLoad {
        view_id: u32,
        state: PageLoadState,
        url: String,
    },
    TitleChanged {
        view_id: u32,
        title: String,
    },
    /// A JSON message posted through `window.chorus.ipc`.
    IpcMessage {
        view_id: u32,
        body: String,
    },
    /// A navigation outside the view's allowlist was refused.
    NavigationBlocked {
        view_id: u32,
        url: String,
    },
}
