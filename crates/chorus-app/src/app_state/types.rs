//! Internal types and constants for the app state module.

use std::sync::Arc;
use std::time::Duration;

/// Events posted to the winit loop from other threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserEvent {
    /// The resize debouncer's quiet period elapsed.
    Relayout,
}

/// Callback the resize debouncer fires; posts [`UserEvent::Relayout`].
pub type RelayoutWaker = Arc<dyn Fn() + Send + Sync>;

/// How often to drain webview events (approx 60 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// How long shutdown waits for the timer runtime to wind down.
pub(super) const RUNTIME_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);
