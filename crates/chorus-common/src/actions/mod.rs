mod action_enum;
mod dispatch;

pub use action_enum::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(Action::Broadcast("x".into()).label(), "Send Prompt");
        assert_eq!(Action::ToggleFullscreen.label(), "Toggle Fullscreen");
        assert_eq!(Action::None.label(), "None");
    }

    #[test]
    fn zoom_labels() {
        assert_eq!(Action::ZoomIn.label(), "Zoom In");
        assert_eq!(Action::ZoomOut.label(), "Zoom Out");
        assert_eq!(Action::ResetZoom.label(), "Reset Zoom");
    }

    #[test]
    fn action_serde_roundtrip() {
        let actions = vec![
            Action::OpenProvider("https://chatgpt.com".into()),
            Action::ClosePane("claude".into()),
            Action::Broadcast("Summarize this".into()),
            Action::ToggleFullscreen,
            Action::ReloadAll,
            Action::Relayout,
            Action::ZoomIn,
            Action::ResetZoom,
        ];

        for action in &actions {
            let json = serde_json::to_string(action).unwrap();
            let deserialized: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(*action, deserialized);
        }
    }
}
