//! Action dispatch: routes resolved actions to the layout manager and window.

use winit::window::Fullscreen;

use chorus_common::errors::PaneError;
use chorus_common::types::PaneId;
use chorus_common::Action;
use chorus_layout::{LayoutEngine, MAX_ZOOM, MIN_ZOOM};

use super::core::ChorusApp;

/// How far one zoom step moves the page zoom.
const ZOOM_STEP: f64 = 0.1;

/// Next zoom after stepping `current` by `steps`, rounded to two decimals
/// and kept inside the range panes accept.
pub(super) fn stepped_zoom(current: f64, steps: i32) -> f64 {
    let next = current + ZOOM_STEP * f64::from(steps);
    ((next * 100.0).round() / 100.0).clamp(MIN_ZOOM, MAX_ZOOM)
}

impl ChorusApp {
    /// Dispatch a resolved [`Action`] to the appropriate subsystem.
    pub(super) fn dispatch(&mut self, action: Action) {
        tracing::debug!(action = action.label(), "Dispatch");
        match action {
            Action::OpenProvider(url) => self.open_provider(&url),
            Action::ClosePane(pattern) => {
                let found = self
                    .layout
                    .as_ref()
                    .and_then(|l| l.find_pane_by_name_pattern(&pattern));
                match found {
                    Some(id) => self.close_pane(id),
                    None => tracing::warn!(pattern = %pattern, "ClosePane: no pane matches"),
                }
            }
            Action::Broadcast(text) => self.broadcast_prompt(&text),
            Action::ReloadAll => {
                if let Some(layout) = self.layout.as_mut() {
                    let reloaded = layout.reload_all();
                    tracing::info!(reloaded, "Panes reloaded");
                }
            }
            Action::Relayout => self.relayout(),
            Action::ZoomIn => self.step_zoom(1),
            Action::ZoomOut => self.step_zoom(-1),
            Action::ResetZoom => self.set_default_zoom(self.config.layout.default_zoom),
            Action::ToggleFullscreen => self.toggle_fullscreen(),
            Action::Quit => {
                self.should_exit = true;
            }
            Action::None => {}
        }
    }

    /// Open a pane on `url` at the right edge.
    ///
    /// Refuses anything but https. Opening a URL that is already open is a
    /// logged no-op; hitting the pane limit is reported to the prompt bar.
    pub(super) fn open_provider(&mut self, url: &str) {
        if !url.starts_with("https://") {
            tracing::warn!(url, "OpenProvider rejected: not an https URL");
            self.notify_chrome(&format!("Only https:// addresses can be opened ({url})"));
            return;
        }

        let Some(layout) = self.layout.as_mut() else {
            tracing::warn!(url, "Cannot open provider: layout not initialized");
            return;
        };

        if layout.contains_url(url) {
            tracing::info!(url, "OpenProvider ignored: already open");
            return;
        }

        match layout.add_pane(url) {
            Ok(id) => {
                tracing::info!(pane_id = id.0, url, count = self.pane_count(), "Provider opened");
                self.place_chrome();
                self.push_pane_list();
                self.update_window_title();
            }
            Err(e @ PaneError::LimitReached(_)) => {
                self.notify_chrome(&e.to_string());
            }
            Err(e) => {
                tracing::error!(url, error = %e, "Failed to open provider");
                self.notify_chrome(&e.to_string());
            }
        }
    }

    /// Close one pane by id and re-tile the rest.
    pub(super) fn close_pane(&mut self, id: PaneId) {
        let Some(layout) = self.layout.as_mut() else {
            return;
        };
        let view_id = layout.view(id).map(|v| v.view_id());
        if layout.remove_pane(id) {
            if let Some(view_id) = view_id {
                self.page_titles.remove(&view_id);
            }
            self.push_pane_list();
            self.update_window_title();
        }
    }

    /// Point one pane at another https page.
    pub(super) fn navigate_pane(&mut self, id: PaneId, url: &str) {
        if !url.starts_with("https://") {
            tracing::warn!(%id, url, "Navigate rejected: not an https URL");
            self.notify_chrome(&format!("Only https:// addresses can be opened ({url})"));
            return;
        }
        let Some(layout) = self.layout.as_mut() else {
            return;
        };
        if let Err(e) = layout.navigate(id, url) {
            self.notify_chrome(&e.to_string());
        }
    }

    fn step_zoom(&mut self, steps: i32) {
        let Some(layout) = &self.layout else {
            return;
        };
        let next = stepped_zoom(layout.layout_engine().default_zoom, steps);
        self.set_default_zoom(next);
    }

    /// Zoom every pane (and every pane opened later) to `zoom`.
    fn set_default_zoom(&mut self, zoom: f64) {
        let Some(layout) = self.layout.as_mut() else {
            return;
        };
        let engine = LayoutEngine {
            default_zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            ..layout.layout_engine().clone()
        };
        layout.update_settings(engine);
        tracing::info!(zoom, "Pane zoom changed");
        self.place_chrome();
        self.push_pane_list();
    }

    fn toggle_fullscreen(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        let next = match window.fullscreen() {
            Some(_) => None,
            None => Some(Fullscreen::Borderless(None)),
        };
        tracing::info!(fullscreen = next.is_some(), "Toggling fullscreen");
        // The size change arrives as a Resized event and goes through the
        // debouncer like any other resize.
        window.set_fullscreen(next);
    }
}
