//! Resize debouncing.
//!
//! Window resize events arrive in bursts. [`ResizeDebouncer`] collapses a
//! burst into one callback fired a fixed delay after the last event.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

/// Coalesces rapid notifications into a single delayed callback.
///
/// Each [`notify`](Self::notify) replaces the pending timer instead of
/// stacking a new one. [`cancel`](Self::cancel) and `Drop` abort the
/// pending timer, so a torn-down window never sees a late relayout.
pub struct ResizeDebouncer {
    runtime: Handle,
    delay: Duration,
    on_fire: Arc<dyn Fn() + Send + Sync>,
    pending: Option<JoinHandle<()>>,
    /// Bumped on every notify/cancel; a timer only fires if it still
    /// holds the latest generation.
    generation: Arc<AtomicU64>,
}

impl ResizeDebouncer {
    pub fn new<F>(runtime: Handle, delay: Duration, on_fire: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            runtime,
            delay,
            on_fire: Arc::new(on_fire),
            pending: None,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Restart the quiet period.
    pub fn notify(&mut self) {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(task) = self.pending.take() {
            task.abort();
        }

        let generation = Arc::clone(&self.generation);
        let on_fire = Arc::clone(&self.on_fire);
        let delay = self.delay;
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if generation.load(Ordering::SeqCst) == ticket {
                on_fire();
            }
        }));
    }

    /// Drop the pending callback, if any.
    pub fn cancel(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(task) = self.pending.take() {
            task.abort();
            debug!("pending resize relayout cancelled");
        }
    }

    /// Whether a callback is scheduled and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Drop for ResizeDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
