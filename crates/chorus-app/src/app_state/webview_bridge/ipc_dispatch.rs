//! IPC message validation and dispatch from webviews to Rust handlers.

use chorus_common::types::PaneId;
use chorus_common::Action;
use chorus_webview::{IpcMessage, IpcPayload};

use crate::app_state::core::ChorusApp;

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

/// Kinds the prompt bar may send.
const CHROME_IPC_KINDS: &[&str] = &[
    "open_provider",
    "close_provider",
    "navigate_pane",
    "broadcast_prompt",
    "reload_panes",
    "zoom_in",
    "zoom_out",
    "reset_zoom",
    "toggle_fullscreen",
    "list_panes",
];

/// Kinds a provider page may send. Provider pages run third-party code,
/// so they get nothing that changes panes or the window.
const PANE_IPC_KINDS: &[&str] = &["prompt_failed"];

/// Who sent an IPC message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::app_state) enum IpcSource {
    Chrome,
    Pane(PaneId),
}

/// Check whether `source` may send a message of `kind`.
pub(in crate::app_state) fn is_ipc_kind_allowed(source: IpcSource, kind: &str) -> bool {
    match source {
        IpcSource::Chrome => CHROME_IPC_KINDS.contains(&kind),
        IpcSource::Pane(_) => PANE_IPC_KINDS.contains(&kind),
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// A validated prompt bar request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(in crate::app_state) enum ChromeRequest {
    Run(Action),
    ClosePane(PaneId),
    Navigate(PaneId, String),
    ListPanes,
}

fn pane_id_field(payload: &IpcPayload) -> Option<Result<PaneId, String>> {
    payload.u64_field("pane_id").map(|id| {
        u32::try_from(id)
            .map(PaneId)
            .map_err(|_| format!("pane_id {id} out of range"))
    })
}

/// Turn an allowlisted prompt bar message into a request.
pub(in crate::app_state) fn parse_chrome_request(msg: &IpcMessage) -> Result<ChromeRequest, String> {
    let payload = &msg.payload;
    match msg.kind.as_str() {
        "open_provider" => payload
            .str_field("url")
            .map(|url| ChromeRequest::Run(Action::OpenProvider(url.to_string())))
            .ok_or_else(|| "open_provider needs a url".to_string()),
        "close_provider" => {
            if let Some(id) = pane_id_field(payload) {
                id.map(ChromeRequest::ClosePane)
            } else if let Some(pattern) = payload.str_field("pattern") {
                Ok(ChromeRequest::Run(Action::ClosePane(pattern.to_string())))
            } else {
                Err("close_provider needs a pane_id or pattern".to_string())
            }
        }
        "navigate_pane" => {
            let id = pane_id_field(payload)
                .ok_or_else(|| "navigate_pane needs a pane_id".to_string())??;
            let url = payload
                .str_field("url")
                .ok_or_else(|| "navigate_pane needs a url".to_string())?;
            Ok(ChromeRequest::Navigate(id, url.to_string()))
        }
        "broadcast_prompt" => payload
            .as_text()
            .map(|text| ChromeRequest::Run(Action::Broadcast(text.to_string())))
            .ok_or_else(|| "broadcast_prompt needs text".to_string()),
        "reload_panes" => Ok(ChromeRequest::Run(Action::ReloadAll)),
        "zoom_in" => Ok(ChromeRequest::Run(Action::ZoomIn)),
        "zoom_out" => Ok(ChromeRequest::Run(Action::ZoomOut)),
        "reset_zoom" => Ok(ChromeRequest::Run(Action::ResetZoom)),
        "toggle_fullscreen" => Ok(ChromeRequest::Run(Action::ToggleFullscreen)),
        "list_panes" => Ok(ChromeRequest::ListPanes),
        other => Err(format!("unhandled kind {other}")),
    }
}

// =============================================================================
// DISPATCH
// =============================================================================

impl ChorusApp {
    /// Handle a single IPC message from a webview.
    pub(in crate::app_state) fn handle_ipc_message(&mut self, view_id: u32, body: &str) {
        let source = if self.chrome.as_ref().is_some_and(|c| c.view_id() == view_id) {
            IpcSource::Chrome
        } else if let Some(pane_id) = self.pane_for_view(view_id) {
            IpcSource::Pane(pane_id)
        } else {
            tracing::warn!(view_id, "IPC message rejected: unknown view");
            return;
        };

        let Some(msg) = IpcMessage::from_json(body) else {
            tracing::warn!(view_id, body_len = body.len(), "IPC message rejected: failed to parse");
            return;
        };

        if !is_ipc_kind_allowed(source, &msg.kind) {
            tracing::warn!(view_id, ?source, kind = %msg.kind, "IPC message rejected: kind not allowed");
            return;
        }

        tracing::debug!(view_id, ?source, kind = %msg.kind, "IPC message dispatched");

        match source {
            IpcSource::Chrome => self.handle_chrome_message(&msg),
            IpcSource::Pane(pane_id) => self.handle_pane_message(pane_id, &msg),
        }
    }

    fn handle_chrome_message(&mut self, msg: &IpcMessage) {
        match parse_chrome_request(msg) {
            Ok(ChromeRequest::Run(action)) => self.dispatch(action),
            Ok(ChromeRequest::ClosePane(id)) => self.close_pane(id),
            Ok(ChromeRequest::Navigate(id, url)) => self.navigate_pane(id, &url),
            Ok(ChromeRequest::ListPanes) => {
                self.push_catalog();
                self.push_pane_list();
            }
            Err(reason) => {
                tracing::warn!(kind = %msg.kind, reason = %reason, "Malformed prompt bar message");
            }
        }
    }

    fn handle_pane_message(&mut self, pane_id: PaneId, msg: &IpcMessage) {
        if msg.kind == "prompt_failed" {
            let reason = msg.payload.as_text().unwrap_or("unknown reason");
            let name = self
                .layout
                .as_ref()
                .and_then(|l| l.pane(pane_id))
                .map_or("pane", |p| p.title());
            tracing::warn!(%pane_id, reason, "Prompt delivery failed in page");
            self.notify_chrome(&format!("{name}: {reason}"));
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::core::test_app;
    use serde_json::json;

    #[test]
    fn chrome_kinds_allowed() {
        for kind in CHROME_IPC_KINDS {
            assert!(is_ipc_kind_allowed(IpcSource::Chrome, kind));
        }
        assert!(!is_ipc_kind_allowed(IpcSource::Chrome, "prompt_failed"));
    }

    #[test]
    fn panes_cannot_drive_the_app() {
        let pane = IpcSource::Pane(PaneId(1));
        assert!(is_ipc_kind_allowed(pane, "prompt_failed"));
        for kind in CHROME_IPC_KINDS {
            assert!(!is_ipc_kind_allowed(pane, kind), "{kind} allowed from a pane");
        }
    }

    #[test]
    fn kind_rejected_unknown() {
        assert!(!is_ipc_kind_allowed(IpcSource::Chrome, "eval"));
        assert!(!is_ipc_kind_allowed(IpcSource::Chrome, ""));
        assert!(!is_ipc_kind_allowed(IpcSource::Chrome, "OPEN_PROVIDER"));
        assert!(!is_ipc_kind_allowed(IpcSource::Chrome, "open_provider\0"));
        assert!(!is_ipc_kind_allowed(IpcSource::Chrome, "list_panes; rm -rf /"));
    }

    #[test]
    fn parses_open_provider() {
        let msg = IpcMessage::json("open_provider", json!({ "url": "https://claude.ai" }));
        assert_eq!(
            parse_chrome_request(&msg),
            Ok(ChromeRequest::Run(Action::OpenProvider("https://claude.ai".into())))
        );
    }

    #[test]
    fn open_provider_without_url_is_malformed() {
        let msg = IpcMessage::json("open_provider", json!({}));
        assert!(parse_chrome_request(&msg).is_err());
    }

    #[test]
    fn parses_close_by_id_and_by_pattern() {
        let by_id = IpcMessage::json("close_provider", json!({ "pane_id": 4 }));
        assert_eq!(parse_chrome_request(&by_id), Ok(ChromeRequest::ClosePane(PaneId(4))));

        let by_pattern = IpcMessage::json("close_provider", json!({ "pattern": "claude" }));
        assert_eq!(
            parse_chrome_request(&by_pattern),
            Ok(ChromeRequest::Run(Action::ClosePane("claude".into())))
        );
    }

    #[test]
    fn parses_navigate_pane() {
        let msg = IpcMessage::json(
            "navigate_pane",
            json!({ "pane_id": 2, "url": "https://claude.ai/new" }),
        );
        assert_eq!(
            parse_chrome_request(&msg),
            Ok(ChromeRequest::Navigate(PaneId(2), "https://claude.ai/new".into()))
        );
        let no_url = IpcMessage::json("navigate_pane", json!({ "pane_id": 2 }));
        assert!(parse_chrome_request(&no_url).is_err());
        let no_id = IpcMessage::json("navigate_pane", json!({ "url": "https://claude.ai" }));
        assert!(parse_chrome_request(&no_id).is_err());
    }

    #[test]
    fn parses_zoom_kinds() {
        for (kind, action) in [
            ("zoom_in", Action::ZoomIn),
            ("zoom_out", Action::ZoomOut),
            ("reset_zoom", Action::ResetZoom),
        ] {
            let msg = IpcMessage::from_json(&format!(r#"{{"kind":"{kind}"}}"#)).unwrap();
            assert_eq!(parse_chrome_request(&msg), Ok(ChromeRequest::Run(action)));
        }
    }

    #[test]
    fn close_with_huge_id_is_malformed() {
        let msg = IpcMessage::json("close_provider", json!({ "pane_id": u64::MAX }));
        assert!(parse_chrome_request(&msg).is_err());
    }

    #[test]
    fn parses_broadcast_text() {
        let msg = IpcMessage::text("broadcast_prompt", "Compare these answers");
        assert_eq!(
            parse_chrome_request(&msg),
            Ok(ChromeRequest::Run(Action::Broadcast("Compare these answers".into())))
        );
        let not_text = IpcMessage::json("broadcast_prompt", json!({ "text": 1 }));
        assert!(parse_chrome_request(&not_text).is_err());
    }

    #[test]
    fn parses_payloadless_kinds() {
        let raw = r#"{"kind":"toggle_fullscreen","payload":null}"#;
        let msg = IpcMessage::from_json(raw).unwrap();
        assert_eq!(
            parse_chrome_request(&msg),
            Ok(ChromeRequest::Run(Action::ToggleFullscreen))
        );
        let msg = IpcMessage::from_json(r#"{"kind":"reload_panes"}"#).unwrap();
        assert_eq!(parse_chrome_request(&msg), Ok(ChromeRequest::Run(Action::ReloadAll)));
        let msg = IpcMessage::from_json(r#"{"kind":"list_panes"}"#).unwrap();
        assert_eq!(parse_chrome_request(&msg), Ok(ChromeRequest::ListPanes));
    }

    #[test]
    fn message_from_unknown_view_is_ignored() {
        let mut app = test_app();
        app.handle_ipc_message(42, r#"{"kind":"toggle_fullscreen","payload":null}"#);
        assert!(!app.should_exit);
        assert_eq!(app.pane_count(), 0);
    }
}
