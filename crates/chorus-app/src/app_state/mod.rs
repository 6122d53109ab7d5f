//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, the pane layout manager, the prompt bar
//! and the resize debouncer.

mod broadcast;
mod core;
mod dispatch;
mod event_handler;
mod init;
mod polling;
mod shutdown;
mod title;
mod types;
mod webview_bridge;

pub use core::ChorusApp;
pub use types::{RelayoutWaker, UserEvent};
