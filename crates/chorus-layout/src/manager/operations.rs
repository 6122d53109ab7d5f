//! Add, remove, and relayout operations on the LayoutManager.

use chorus_common::errors::PaneError;
use chorus_common::types::PaneId;
use tracing::{debug, info, warn};

use crate::container::Container;
use crate::layout::{LayoutEngine, MAX_ZOOM, MIN_ZOOM};
use crate::pane::Pane;

use super::LayoutManager;

impl<C: Container> LayoutManager<C> {
    /// Open a new pane on `url` at the right edge and re-tile every pane.
    ///
    /// If the container refuses to create the view, nothing is registered
    /// and the current layout is left untouched.
    pub fn add_pane(&mut self, url: &str) -> Result<PaneId, PaneError> {
        let max = self.layout_engine.max_panes;
        if self.registry.count() >= max {
            warn!(max, url, "add_pane rejected: at pane limit");
            return Err(PaneError::LimitReached(max));
        }

        let view = self
            .container
            .create_view(url, &self.preferences)
            .map_err(|e| PaneError::CreationFailure {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let id = PaneId(self.next_id);
        self.next_id += 1;

        self.container.attach(&view);
        self.registry.add(Pane::new(id, url), view);

        // Every pane's width depends on the count, not just the new one.
        self.apply_layout();

        let zoom = self.layout_engine.default_zoom;
        if let Err(e) = self.set_zoom(id, zoom) {
            warn!(pane_id = id.0, zoom, error = %e, "Failed to set initial zoom");
        }

        info!(pane_id = id.0, url, count = self.registry.count(), "Pane added");
        Ok(id)
    }

    /// Close a pane and re-tile the remaining ones.
    ///
    /// Returns `false` if the id is not registered (a stale id, e.g. a
    /// second close of the same pane); that case is logged and no relayout
    /// happens.
    pub fn remove_pane(&mut self, id: PaneId) -> bool {
        if let Some((_, view)) = self.registry.get(id) {
            self.container.detach(view);
        }

        let Some((pane, view)) = self.registry.remove(id) else {
            warn!(error = %PaneError::HandleNotFound(id), "remove_pane ignored");
            return false;
        };
        drop(view);
        self.zooms.remove(&id);
        info!(pane_id = id.0, url = %pane.url, count = self.registry.count(), "Pane removed");

        if self.registry.is_empty() {
            self.applied.clear();
        } else {
            self.apply_layout();
        }
        true
    }

    /// Load `url` in an open pane.
    ///
    /// The pane keeps the URL and provider it was opened with, so reloads
    /// and pattern lookups still see the original identifier.
    pub fn navigate(&mut self, id: PaneId, url: &str) -> Result<(), PaneError> {
        let Some((pane, view)) = self.registry.get(id) else {
            warn!(error = %PaneError::HandleNotFound(id), url, "navigate ignored");
            return Err(PaneError::HandleNotFound(id));
        };
        self.container
            .load_address(view, url)
            .map_err(|e| PaneError::ActionFailed {
                pane: id,
                url: pane.url.clone(),
                reason: e.to_string(),
            })?;
        debug!(pane_id = id.0, url, "Pane navigated");
        Ok(())
    }

    /// Set the page zoom of one pane, clamped to [`MIN_ZOOM`]..=[`MAX_ZOOM`].
    /// Returns the factor actually applied.
    pub fn set_zoom(&mut self, id: PaneId, factor: f64) -> Result<f64, PaneError> {
        let Some((pane, view)) = self.registry.get(id) else {
            return Err(PaneError::HandleNotFound(id));
        };
        if !factor.is_finite() {
            return Err(PaneError::ActionFailed {
                pane: id,
                url: pane.url.clone(),
                reason: format!("invalid zoom factor {factor}"),
            });
        }
        let factor = factor.clamp(MIN_ZOOM, MAX_ZOOM);
        self.container
            .set_zoom(view, factor)
            .map_err(|e| PaneError::ActionFailed {
                pane: id,
                url: pane.url.clone(),
                reason: e.to_string(),
            })?;
        self.zooms.insert(id, factor);
        Ok(factor)
    }

    /// Replace the layout settings and re-tile every pane.
    ///
    /// A new default zoom is pushed to every open pane. Lowering the pane
    /// limit does not close panes that are already open.
    pub fn update_settings(&mut self, engine: LayoutEngine) {
        let zoom_changed = engine.default_zoom != self.layout_engine.default_zoom;
        self.layout_engine = engine;

        if zoom_changed {
            let zoom = self.layout_engine.default_zoom;
            let ids: Vec<PaneId> = self.registry.panes().iter().map(|p| p.id).collect();
            for id in ids {
                if let Err(e) = self.set_zoom(id, zoom) {
                    warn!(pane_id = id.0, zoom, error = %e, "Failed to apply zoom");
                }
            }
        }

        self.relayout_all();
        debug!(settings = ?self.layout_engine, "Layout settings updated");
    }

    /// Re-tile every pane at the current container size. Membership is not
    /// touched, so calling it twice in a row applies identical bounds.
    pub fn relayout_all(&mut self) {
        let applied = self.apply_layout();
        debug!(panes = applied, "Relayout");
    }

    /// Send every pane back to the URL it was opened with.
    pub fn reload_all(&mut self) -> usize {
        let mut reloaded = 0;
        for (pane, view) in self.registry.iter() {
            match self.container.load_address(view, &pane.url) {
                Ok(()) => reloaded += 1,
                Err(e) => {
                    warn!(pane_id = pane.id.0, url = %pane.url, error = %e, "Failed to reload pane");
                }
            }
        }
        reloaded
    }

    /// Detach and drop every pane, leftmost first. Used at shutdown.
    pub fn remove_all(&mut self) -> usize {
        let drained = self.registry.drain();
        let count = drained.len();
        self.applied.clear();
        self.zooms.clear();
        for (pane, view) in drained {
            self.container.detach(&view);
            debug!(pane_id = pane.id.0, "Pane released");
        }
        count
    }

    /// Apply bounds to every pane in registry order. A view that rejects
    /// its bounds is logged and skipped; the rest still get laid out.
    fn apply_layout(&mut self) -> usize {
        let size = self.container.container_size();
        let rects = self.layout_engine.compute(size, self.registry.count());
        self.applied.clear();
        for ((pane, view), rect) in self.registry.iter().zip(rects) {
            match self.container.set_bounds(view, rect) {
                Ok(()) => self.applied.push((pane.id, rect)),
                Err(e) => {
                    warn!(pane_id = pane.id.0, ?rect, error = %e, "Failed to update pane bounds");
                }
            }
        }
        self.applied.len()
    }
}
