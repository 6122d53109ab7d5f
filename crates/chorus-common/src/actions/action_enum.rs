use serde::{Deserialize, Serialize};

/// Every user-triggerable action in the application.
///
/// Chrome IPC messages and the CLI all resolve to an `Action`.
/// The app state dispatcher matches on this enum to route to subsystems.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Panes --
    /// Open a pane on the given URL.
    OpenProvider(String),
    /// Close the first pane whose URL contains the pattern.
    ClosePane(String),
    /// Send a prompt to every open pane.
    Broadcast(String),
    /// Send every pane back to the URL it was opened with.
    ReloadAll,
    Relayout,
    /// Step the zoom of every pane up or down, or back to the configured
    /// default.
    ZoomIn,
    ZoomOut,
    ResetZoom,

    // -- Window --
    ToggleFullscreen,
    Quit,

    // -- Noop --
    None,
}
