//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::ChorusApp;
use super::types::UserEvent;

impl ApplicationHandler<UserEvent> for ChorusApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.open_startup_providers();
        self.place_chrome();
        self.update_window_title();
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: UserEvent) {
        match event {
            UserEvent::Relayout => {
                tracing::debug!("Debounced relayout");
                self.relayout();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.schedule_relayout();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                self.schedule_relayout();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            self.shutdown();
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl ChorusApp {
    /// Restart the resize quiet period. Without a debouncer (runtime
    /// failed to start) relayout happens immediately.
    pub(super) fn schedule_relayout(&mut self) {
        match self.debouncer.as_mut() {
            Some(debouncer) => debouncer.notify(),
            None => self.relayout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use chorus_config::schema::ChorusConfig;

    use crate::app_state::core::ChorusApp;

    #[test]
    fn resize_wakes_the_event_loop() {
        let wakes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&wakes);
        let mut config = ChorusConfig::default();
        config.layout.resize_debounce_ms = 10;
        let mut app = ChorusApp::new(
            config,
            Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );
        assert!(app.initialize_runtime());

        app.schedule_relayout();
        assert!(app.debouncer.as_ref().is_some_and(|d| d.is_pending()));

        // Collapsing is covered by the debouncer's paused-clock tests; here
        // only the wiring to the waker matters.
        let deadline = Instant::now() + Duration::from_secs(5);
        while wakes.load(Ordering::SeqCst) == 0 && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(wakes.load(Ordering::SeqCst) >= 1);

        app.shutdown();
    }

    #[test]
    fn schedule_without_debouncer_relayouts_inline() {
        let mut app = crate::app_state::core::test_app();
        app.schedule_relayout();
        assert!(app.debouncer.is_none());
    }
}
