//! WebView layer for Chorus panes and the prompt bar.
//!
//! Wraps the `wry` crate to provide:
//! - One managed WebView per provider pane, plus the prompt bar ("chrome")
//! - Bidirectional IPC (Rust <-> JavaScript)
//! - A `chorus://` custom protocol serving the bundled prompt bar
//! - Navigation allowlists per view role
//! - Event queue (page load, title change, IPC, blocked navigation)

pub mod assets;
pub mod events;
pub mod ipc;
pub mod manager;

pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{IpcMessage, IpcPayload};
pub use manager::{ViewRole, WebViewConfig, WebViewHandle, WebViewManager};
