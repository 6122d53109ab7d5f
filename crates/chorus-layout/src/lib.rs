//! Side-by-side pane layout for embedded chat views.
//!
//! The [`LayoutManager`] owns the [`PaneRegistry`] and drives a
//! [`Container`] (the host window) so that pane metadata and the views
//! behind it are always added, removed, and tiled together.

pub mod container;
pub mod debounce;
pub mod layout;
pub mod manager;
pub mod pane;
pub mod registry;

#[cfg(test)]
pub(crate) mod testing;

pub use container::{Container, ViewPreferences};
pub use debounce::ResizeDebouncer;
pub use layout::{LayoutEngine, MAX_ZOOM, MIN_ZOOM};
pub use manager::{BroadcastOutcome, LayoutManager};
pub use pane::Pane;
pub use registry::PaneRegistry;
