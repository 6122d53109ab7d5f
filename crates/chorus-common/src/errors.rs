use std::path::PathBuf;

use crate::types::PaneId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config write error: {0}")]
    WriteError(String),
}

/// Failures raised by the pane layout subsystem.
///
/// Only `CreationFailure` ever reaches the caller of `add_pane`; the other
/// variants are recovered locally and logged.
#[derive(Debug, thiserror::Error)]
pub enum PaneError {
    #[error("failed to create view for {url}: {reason}")]
    CreationFailure { url: String, reason: String },

    #[error("{0} is not registered")]
    HandleNotFound(PaneId),

    #[error("action failed on {pane} ({url}): {reason}")]
    ActionFailed {
        pane: PaneId,
        url: String,
        reason: String,
    },

    #[error("pane limit reached ({0})")]
    LimitReached(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("layout.default_zoom = 9 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: layout.default_zoom = 9 is out of range"
        );

        let err = ConfigError::WriteError("disk full".into());
        assert_eq!(err.to_string(), "config write error: disk full");
    }

    #[test]
    fn pane_error_display() {
        let err = PaneError::CreationFailure {
            url: "https://claude.ai".into(),
            reason: "no parent window".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to create view for https://claude.ai: no parent window"
        );

        let err = PaneError::HandleNotFound(PaneId(9));
        assert_eq!(err.to_string(), "pane-9 is not registered");

        let err = PaneError::ActionFailed {
            pane: PaneId(2),
            url: "https://chatgpt.com".into(),
            reason: "navigation in progress".into(),
        };
        assert_eq!(
            err.to_string(),
            "action failed on pane-2 (https://chatgpt.com): navigation in progress"
        );

        assert_eq!(
            PaneError::LimitReached(6).to_string(),
            "pane limit reached (6)"
        );
    }
}
