mod constants;
mod math_helpers;

pub use constants::*;
pub use math_helpers::*;
