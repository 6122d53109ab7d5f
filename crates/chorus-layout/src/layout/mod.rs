mod calculation;
mod types;

pub use calculation::{compute_bounds, row_bounds};
pub use types::*;
