mod core;
mod provider;

pub use self::core::*;
pub use provider::*;
