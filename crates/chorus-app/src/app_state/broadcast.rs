//! Prompt broadcast: one prompt typed into every open pane.

use serde_json::{json, Value};

use chorus_layout::BroadcastOutcome;

use super::core::ChorusApp;

/// The `broadcast_result` payload the prompt bar renders.
pub(super) fn broadcast_summary(outcomes: &[BroadcastOutcome]) -> Value {
    let failed: Vec<Value> = outcomes
        .iter()
        .filter_map(|o| {
            o.result.as_ref().err().map(|e| {
                json!({
                    "pane": o.pane.0,
                    "url": o.url,
                    "error": e.to_string(),
                })
            })
        })
        .collect();
    json!({
        "delivered": outcomes.len() - failed.len(),
        "failed": failed,
    })
}

impl ChorusApp {
    /// Deliver `text` to every pane. A pane that fails is reported, the
    /// rest still receive the prompt.
    pub(super) fn broadcast_prompt(&mut self, text: &str) {
        if text.trim().is_empty() {
            tracing::debug!("Empty prompt not broadcast");
            return;
        }
        let Some(layout) = &self.layout else {
            return;
        };

        let payload = Value::String(text.to_string());
        let outcomes = layout.broadcast(|_, view| view.send_ipc("prompt", &payload));
        let summary = broadcast_summary(&outcomes);
        tracing::info!(
            panes = outcomes.len(),
            failed = outcomes.iter().filter(|o| !o.is_ok()).count(),
            prompt_len = text.len(),
            "Prompt broadcast"
        );
        self.send_to_chrome("broadcast_result", &summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chorus_common::errors::PaneError;
    use chorus_common::types::PaneId;

    fn ok(id: u32, url: &str) -> BroadcastOutcome {
        BroadcastOutcome {
            pane: PaneId(id),
            url: url.into(),
            result: Ok(()),
        }
    }

    #[test]
    fn all_delivered() {
        let outcomes = vec![ok(1, "https://chatgpt.com"), ok(2, "https://claude.ai")];
        assert_eq!(
            broadcast_summary(&outcomes),
            json!({ "delivered": 2, "failed": [] })
        );
    }

    #[test]
    fn failures_are_listed_with_their_pane() {
        let outcomes = vec![
            ok(1, "https://chatgpt.com"),
            BroadcastOutcome {
                pane: PaneId(2),
                url: "https://claude.ai".into(),
                result: Err(PaneError::ActionFailed {
                    pane: PaneId(2),
                    url: "https://claude.ai".into(),
                    reason: "webview gone".into(),
                }),
            },
            ok(3, "https://gemini.google.com"),
        ];
        let summary = broadcast_summary(&outcomes);
        assert_eq!(summary["delivered"], 2);
        assert_eq!(summary["failed"][0]["pane"], 2);
        assert_eq!(summary["failed"][0]["url"], "https://claude.ai");
        assert!(summary["failed"][0]["error"]
            .as_str()
            .unwrap()
            .contains("webview gone"));
    }

    #[test]
    fn no_panes_no_deliveries() {
        assert_eq!(broadcast_summary(&[]), json!({ "delivered": 0, "failed": [] }));
    }

    #[test]
    fn blank_prompt_is_not_sent() {
        let mut app = crate::app_state::core::test_app();
        app.broadcast_prompt("   \n");
    }
}
