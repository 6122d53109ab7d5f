//! Core types and constructors for LayoutManager.

use std::collections::HashMap;

use chorus_common::types::{PaneId, Rect};

use crate::container::{Container, ViewPreferences};
use crate::layout::LayoutEngine;
use crate::pane::Pane;
use crate::registry::PaneRegistry;

/// Owns the pane registry and the container, and is the only thing that
/// mutates either. Every operation takes `&mut self` and finishes the
/// registry change together with the relayout it implies.
pub struct LayoutManager<C: Container> {
    /// The host window the views live in.
    pub(super) container: C,
    /// Pane metadata and views, in visual order.
    pub(super) registry: PaneRegistry<C::View>,
    /// Layout engine configuration.
    pub(super) layout_engine: LayoutEngine,
    /// Preferences for newly created views.
    pub(super) preferences: ViewPreferences,
    /// Auto-incrementing counter for pane IDs.
    pub(super) next_id: u32,
    /// Bounds from the last layout pass, for panes that accepted them.
    pub(super) applied: Vec<(PaneId, Rect)>,
    /// Zoom each pane was last set to.
    pub(super) zooms: HashMap<PaneId, f64>,
}

impl<C: Container> LayoutManager<C> {
    pub fn new(container: C) -> Self {
        Self::with_layout(container, LayoutEngine::default(), ViewPreferences::default())
    }

    /// Create with a custom layout engine and view preferences.
    pub fn with_layout(
        container: C,
        layout_engine: LayoutEngine,
        preferences: ViewPreferences,
    ) -> Self {
        Self {
            container,
            registry: PaneRegistry::new(),
            layout_engine,
            preferences,
            next_id: 1,
            applied: Vec::new(),
            zooms: HashMap::new(),
        }
    }

    // -- Accessors --

    pub fn pane_count(&self) -> usize {
        self.registry.count()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Pane metadata in visual order.
    pub fn panes(&self) -> &[Pane] {
        self.registry.panes()
    }

    pub fn pane(&self, id: PaneId) -> Option<&Pane> {
        self.registry.get(id).map(|(pane, _)| pane)
    }

    pub fn view(&self, id: PaneId) -> Option<&C::View> {
        self.registry.get(id).map(|(_, view)| view)
    }

    /// Ordered `(pane, view)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Pane, &C::View)> {
        self.registry.iter()
    }

    pub fn contains_url(&self, url: &str) -> bool {
        self.registry.contains_url(url)
    }

    /// First pane whose URL contains `pattern`, in visual order.
    pub fn find_pane_by_name_pattern(&self, pattern: &str) -> Option<PaneId> {
        self.registry.find_by_identifier_substring(pattern)
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    pub fn layout_engine(&self) -> &LayoutEngine {
        &self.layout_engine
    }

    /// Bounds applied by the last layout pass, in registry order. A pane
    /// whose view rejected its bounds is missing from the list.
    pub fn pane_bounds(&self) -> &[(PaneId, Rect)] {
        &self.applied
    }

    /// Current zoom of a pane, if one was ever applied to it.
    pub fn zoom(&self, id: PaneId) -> Option<f64> {
        self.zooms.get(&id).copied()
    }

    /// Where the prompt chrome goes at the current container size.
    pub fn chrome_rect(&self) -> Rect {
        self.layout_engine
            .chrome_rect(self.container.container_size())
    }
}
