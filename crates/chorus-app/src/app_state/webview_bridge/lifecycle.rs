//! Prompt bar lifecycle, relayout, event polling and Rust -> chrome pushes.

use serde_json::{json, Value};

use chorus_common::types::{PaneId, Rect};
use chorus_config::schema::ProviderEntry;
use chorus_layout::Pane;
use chorus_webview::WebViewEvent;

use crate::app_state::core::ChorusApp;

use super::bounds::layout_rect_to_wry;

// =============================================================================
// PAYLOADS
// =============================================================================

/// One pane as the prompt bar lists it. `bounds` is `null` until the
/// pane's view has accepted a layout.
pub(in crate::app_state) fn pane_entry(
    pane: &Pane,
    page_title: Option<&str>,
    zoom: Option<f64>,
    bounds: Option<Rect>,
) -> Value {
    json!({
        "id": pane.id.0,
        "url": pane.url,
        "provider": pane.title(),
        "title": page_title.filter(|t| !t.trim().is_empty()).unwrap_or(pane.title()),
        "zoom": zoom,
        "bounds": bounds,
    })
}

pub(in crate::app_state) fn catalog_payload(entries: &[ProviderEntry]) -> Value {
    Value::Array(
        entries
            .iter()
            .map(|e| json!({ "name": e.name, "url": e.url }))
            .collect(),
    )
}

// =============================================================================
// PROMPT BAR
// =============================================================================

impl ChorusApp {
    /// Build the prompt bar in the reserved strip below the panes.
    pub(in crate::app_state) fn create_chrome_view(&mut self) {
        let Some(layout) = self.layout.as_mut() else {
            tracing::warn!("Cannot create prompt bar: layout not initialized");
            return;
        };

        let bounds = layout.chrome_rect();
        let prefs = crate::app_state::init::view_preferences(&self.config.webview);
        match layout.container_mut().create_chrome(bounds, &prefs) {
            Ok(handle) => {
                tracing::info!(view_id = handle.view_id(), ?bounds, "Prompt bar created");
                self.chrome = Some(handle);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create prompt bar");
            }
        }
    }

    /// Pin the prompt bar to the current reserved strip.
    pub(in crate::app_state) fn place_chrome(&self) {
        let (Some(layout), Some(chrome)) = (&self.layout, &self.chrome) else {
            return;
        };
        let rect = layout.chrome_rect();
        if let Err(e) = chrome.set_bounds(layout_rect_to_wry(&rect)) {
            tracing::warn!(?rect, error = %e, "Failed to place prompt bar");
        }
    }

    /// Re-tile every pane and the prompt bar at the current window size.
    pub(in crate::app_state) fn relayout(&mut self) {
        if let Some(layout) = self.layout.as_mut() {
            layout.relayout_all();
        }
        self.place_chrome();
    }

    /// Send a message to the prompt bar, if it exists.
    pub(in crate::app_state) fn send_to_chrome(&self, kind: &str, payload: &Value) {
        if let Some(chrome) = &self.chrome {
            if let Err(e) = chrome.send_ipc(kind, payload) {
                tracing::warn!(kind, error = %e, "Failed to message prompt bar");
            }
        }
    }

    /// Show a one-line notice in the prompt bar's status line.
    pub(in crate::app_state) fn notify_chrome(&self, text: &str) {
        self.send_to_chrome("notice", &Value::String(text.to_string()));
    }

    pub(in crate::app_state) fn pane_list(&self) -> Value {
        let Some(layout) = &self.layout else {
            return Value::Array(Vec::new());
        };
        let applied = layout.pane_bounds();
        Value::Array(
            layout
                .iter()
                .map(|(pane, view)| {
                    let title = self.page_titles.get(&view.view_id()).map(String::as_str);
                    let bounds = applied
                        .iter()
                        .find(|(id, _)| *id == pane.id)
                        .map(|(_, rect)| *rect);
                    pane_entry(pane, title, layout.zoom(pane.id), bounds)
                })
                .collect(),
        )
    }

    pub(in crate::app_state) fn push_pane_list(&self) {
        self.send_to_chrome("panes", &self.pane_list());
    }

    pub(in crate::app_state) fn push_catalog(&self) {
        self.send_to_chrome("catalog", &catalog_payload(&self.config.providers.catalog));
    }

    /// Which pane a webview belongs to.
    pub(in crate::app_state) fn pane_for_view(&self, view_id: u32) -> Option<PaneId> {
        self.layout
            .as_ref()?
            .iter()
            .find(|(_, view)| view.view_id() == view_id)
            .map(|(pane, _)| pane.id)
    }

    fn is_chrome_view(&self, view_id: u32) -> bool {
        self.chrome.as_ref().is_some_and(|c| c.view_id() == view_id)
    }

    // =========================================================================
    // EVENT POLLING
    // =========================================================================

    /// Drain and handle everything the webviews reported since last poll.
    pub(in crate::app_state) fn poll_webview_events(&mut self) {
        let events = match &self.layout {
            Some(layout) => layout.container().drain_events(),
            None => return,
        };

        for event in events {
            match event {
                WebViewEvent::IpcMessage { view_id, body } => {
                    self.handle_ipc_message(view_id, &body);
                }
                WebViewEvent::TitleChanged { view_id, title } => {
                    if self.is_chrome_view(view_id) {
                        continue;
                    }
                    self.page_titles.insert(view_id, title);
                    self.push_pane_list();
                }
                WebViewEvent::PageLoad {
                    view_id,
                    state,
                    url,
                } => {
                    tracing::debug!(view_id, ?state, url = %url, "Page load");
                }
                WebViewEvent::NavigationBlocked { view_id, url } => {
                    if let Some(pane_id) = self.pane_for_view(view_id) {
                        self.notify_chrome(&format!("Blocked {pane_id} from opening {url}"));
                    }
                }
            }
        }
    }
}
