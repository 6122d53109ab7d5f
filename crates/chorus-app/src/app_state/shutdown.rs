//! Graceful shutdown: stop timers, release panes, stop the runtime.

use super::core::ChorusApp;
use super::types::RUNTIME_SHUTDOWN_TIMEOUT;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl ChorusApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Order matters:
    /// 1. Cancel the resize debouncer (no relayout may land mid-teardown)
    /// 2. Release every pane
    /// 3. Drop the prompt bar
    /// 4. Shut down the tokio runtime
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(mut debouncer) = self.debouncer.take() {
            if debouncer.is_pending() {
                tracing::debug!("Dropping pending resize relayout");
            }
            debouncer.cancel();
        }

        if let Some(mut layout) = self.layout.take() {
            let released = layout.remove_all();
            tracing::info!(panes = released, "Panes released");
        }

        self.chrome = None;
        self.page_titles.clear();

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(RUNTIME_SHUTDOWN_TIMEOUT);
        }

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use chorus_config::schema::ChorusConfig;

    use crate::app_state::core::{test_app, ChorusApp};

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = test_app();
        app.shutdown();

        assert!(app.layout.is_none());
        assert!(app.chrome.is_none());
        assert!(app.debouncer.is_none());
        assert!(app.tokio_runtime.is_none());
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = test_app();
        app.shutdown();
        app.shutdown();
        assert!(app.tokio_runtime.is_none());
    }

    #[test]
    fn shutdown_cancels_pending_relayout() {
        let wakes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&wakes);
        let mut config = ChorusConfig::default();
        config.layout.resize_debounce_ms = 50;
        let mut app = ChorusApp::new(
            config,
            Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );
        assert!(app.initialize_runtime());

        app.schedule_relayout();
        app.shutdown();
        std::thread::sleep(Duration::from_millis(200));

        assert_eq!(wakes.load(Ordering::SeqCst), 0);
        assert!(app.debouncer.is_none());
        assert!(app.tokio_runtime.is_none());
    }

    #[test]
    fn shutdown_clears_page_titles() {
        let mut app = test_app();
        app.page_titles.insert(3, "Claude".into());
        app.shutdown();
        assert!(app.page_titles.is_empty());
    }
}
