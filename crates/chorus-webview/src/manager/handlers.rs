use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};

use super::types::ViewRole;
use super::WebViewManager;

// =============================================================================
// NAVIGATION ALLOWLIST
// =============================================================================

/// Provider panes may go anywhere over TLS.
pub const PANE_NAV_PREFIXES: &[&str] = &["https://", "about:blank"];

/// The prompt bar never leaves its bundled assets.
pub const CHROME_NAV_PREFIXES: &[&str] = &[
    "chorus://",
    // WebView2 rewrites chorus://localhost/… to http://chorus.localhost/…
    "http://chorus.localhost/",
    "about:blank",
];

/// Check whether a view with `role` may navigate to `url`.
pub fn is_navigation_allowed(role: ViewRole, url: &str) -> bool {
    let prefixes = match role {
        ViewRole::Pane => PANE_NAV_PREFIXES,
        ViewRole::Chrome => CHROME_NAV_PREFIXES,
    };
    prefixes.iter().any(|prefix| url.starts_with(prefix))
}

fn push(events: &Mutex<Vec<WebViewEvent>>, event: WebViewEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view_id: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(view_id, body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            }

            debug!(view_id, body_len = body.len(), "IPC message from JS");
            push(&events, WebViewEvent::IpcMessage { view_id, body });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view_id: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(view_id, ?state, url = %url, "page load");
            push(&events, WebViewEvent::PageLoad { view_id, state, url });
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view_id: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(view_id, title = %title, "title changed");
            push(&events, WebViewEvent::TitleChanged { view_id, title });
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view_id: u32,
        role: ViewRole,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if is_navigation_allowed(role, &url) {
                return true;
            }
            warn!(view_id, ?role, url = %url, "navigation blocked: URL not in allowlist");
            push(&events, WebViewEvent::NavigationBlocked { view_id, url });
            false
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
