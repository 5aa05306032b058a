mod registry;
mod known_set;

pub use registry::*;
pub use known_set::*;
