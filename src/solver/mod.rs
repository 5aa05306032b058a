mod selector;
mod kinematics;
mod trajectory;

pub use selector::*;
pub use kinematics::*;
pub use trajectory::*;

#[cfg(test)]
mod selector_tests;
