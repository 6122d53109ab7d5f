//! IPC protocol between Rust and JavaScript.
//!
//! - **JS -> Rust**: `window.chorus.ipc.send(kind, payload)` posts
//!   `{"kind": ..., "payload": ...}` through wry's `window.ipc.postMessage`.
//! - **Rust -> JS**: Rust evaluates `window.chorus.ipc._dispatch(kind, payload)`
//!   (see [`js_dispatch_message`]), which calls the handler registered with
//!   `window.chorus.ipc.on(kind, fn)`.

use serde::{Deserialize, Serialize};

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    /// The message payload (arbitrary JSON).
    #[serde(default)]
    pub payload: IpcPayload,
}

/// Payload of an IPC message: a plain string, structured JSON, or nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    /// `null`. Listed before `Json` so untagged matching picks it first.
    #[default]
    None,
    Json(serde_json::Value),
}

impl IpcPayload {
    /// The payload as text, if it is a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            IpcPayload::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a string field of a JSON object payload.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        match self {
            IpcPayload::Json(v) => v.get(key).and_then(|f| f.as_str()),
            _ => None,
        }
    }

    /// Look up an unsigned integer field of a JSON object payload.
    pub fn u64_field(&self, key: &str) -> Option<u64> {
        match self {
            IpcPayload::Json(v) => v.get(key).and_then(|f| f.as_u64()),
            _ => None,
        }
    }
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn text(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: IpcPayload::Text(text.into()),
        }
    }

    pub fn json(kind: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload: IpcPayload::Json(value),
        }
    }
}

/// Sets up `window.chorus.ipc`. Injected into every view before page
/// scripts run.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.chorus = window.chorus || {};
    if (window.chorus.ipc) return;
    window.chorus.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Injected into provider panes only. Handles the `prompt` message by
/// typing the text into the page's composer and submitting it.
///
/// Reports `prompt_failed` back to Rust when no composer can be found.
pub const PROMPT_RECEIVER_SCRIPT: &str = r#"
(function() {
    if (!window.chorus || !window.chorus.ipc) return;

    function visible(el) {
        return el.offsetParent !== null && !el.disabled;
    }

    function findComposer() {
        var selectors = ['textarea', 'div[contenteditable="true"]', '[role="textbox"]'];
        for (var i = 0; i < selectors.length; i++) {
            var nodes = document.querySelectorAll(selectors[i]);
            for (var j = nodes.length - 1; j >= 0; j--) {
                if (visible(nodes[j])) return nodes[j];
            }
        }
        return null;
    }

    function findSendButton(composer) {
        var scope = composer.closest('form') || document;
        return scope.querySelector('button[type="submit"]:not([disabled])')
            || scope.querySelector('button[aria-label*="Send" i]:not([disabled])')
            || scope.querySelector('button[data-testid*="send" i]:not([disabled])');
    }

    function fill(el, text) {
        el.focus();
        if (el.tagName === 'TEXTAREA') {
            var setter = Object.getOwnPropertyDescriptor(HTMLTextAreaElement.prototype, 'value').set;
            setter.call(el, text);
        } else {
            el.textContent = text;
        }
        el.dispatchEvent(new InputEvent('input', { bubbles: true, data: text }));
    }

    window.chorus.ipc.on('prompt', function(text) {
        var composer = findComposer();
        if (!composer) {
            window.chorus.ipc.send('prompt_failed', 'no input box on ' + location.host);
            return;
        }
        fill(composer, text);
        setTimeout(function() {
            var button = findSendButton(composer);
            if (button) {
                button.click();
            } else {
                composer.dispatchEvent(new KeyboardEvent('keydown', {
                    key: 'Enter', code: 'Enter', keyCode: 13, bubbles: true
                }));
            }
        }, 150);
    });
})();
"#;

/// Generate a JS snippet that dispatches a message to the JS IPC handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.chorus && window.chorus.ipc && window.chorus.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}
