//! Fan-out of one action to every pane with per-pane failure isolation.

use std::fmt;

use chorus_common::errors::PaneError;
use chorus_common::types::PaneId;
use tracing::warn;

use crate::container::Container;
use crate::pane::Pane;

use super::LayoutManager;

/// What happened when an action ran against one pane.
#[derive(Debug)]
pub struct BroadcastOutcome {
    pub pane: PaneId,
    pub url: String,
    pub result: Result<(), PaneError>,
}

impl BroadcastOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

impl<C: Container> LayoutManager<C> {
    /// Run `action` on every pane, leftmost first.
    ///
    /// A failing pane is logged and recorded in its outcome; it never stops
    /// the remaining panes from being visited.
    pub fn broadcast<F, E>(&self, mut action: F) -> Vec<BroadcastOutcome>
    where
        F: FnMut(&Pane, &C::View) -> Result<(), E>,
        E: fmt::Display,
    {
        self.registry
            .iter()
            .map(|(pane, view)| {
                let result = action(pane, view).map_err(|e| {
                    let err = PaneError::ActionFailed {
                        pane: pane.id,
                        url: pane.url.clone(),
                        reason: e.to_string(),
                    };
                    warn!(pane_id = pane.id.0, url = %pane.url, error = %e, "Pane action failed");
                    err
                });
                BroadcastOutcome {
                    pane: pane.id,
                    url: pane.url.clone(),
                    result,
                }
            })
            .collect()
    }
}
