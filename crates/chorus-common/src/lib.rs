pub mod actions;
pub mod errors;
pub mod types;

pub use actions::Action;
pub use errors::{ConfigError, PaneError};
pub use types::{PaneId, ProviderKind, Rect, Size};
