use super::Action;

impl Action {
    /// Human-readable label for menus and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Action::OpenProvider(_) => "Open Provider",
            Action::ClosePane(_) => "Close Pane",
            Action::Broadcast(_) => "Send Prompt",
            Action::ReloadAll => "New Chat Everywhere",
            Action::ZoomIn => "Zoom In",
            Action::ZoomOut => "Zoom Out",
            Action::ResetZoom => "Reset Zoom",
            Action::Relayout => "Relayout Panes",
            Action::ToggleFullscreen => "Toggle Fullscreen",
            Action::Quit => "Quit",
            Action::None => "None",
        }
    }
}
