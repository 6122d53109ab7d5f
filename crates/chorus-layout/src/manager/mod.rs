//! The LayoutManager coordinates the pane registry, the container, and
//! the row layout.

mod broadcast;
mod operations;
mod types;

pub use broadcast::BroadcastOutcome;
pub use types::*;
