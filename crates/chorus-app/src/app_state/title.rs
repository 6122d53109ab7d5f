//! Window title reflecting the open providers.

use chorus_layout::Pane;

use super::core::ChorusApp;

/// `"Chorus"` alone, or followed by the open providers in visual order.
pub(super) fn window_title(base: &str, panes: &[Pane]) -> String {
    if panes.is_empty() {
        return base.to_string();
    }
    let names: Vec<&str> = panes.iter().map(|p| p.title()).collect();
    format!("{base} - {}", names.join(" | "))
}

impl ChorusApp {
    pub(super) fn update_window_title(&self) {
        let (Some(window), Some(layout)) = (&self.window, &self.layout) else {
            return;
        };
        window.set_title(&window_title(&self.config.window.title, layout.panes()));
    }
}
