pub mod utils;
pub mod errors;
pub mod constants_config;
pub mod quantities;
pub mod validation;
pub mod solver;
pub mod apis;

pub use utils::DEFAULT_SOLVER_CONFIG;

/// ### General helper function
/// - Asserts that two floating point numbers are approximately equal.
///
/// ### Arguments
///
/// * `a` - The first floating point number.
/// * `b` - The second floating point number.
/// * `epsilon` - The maximum difference between `a` and `b` for them to be considered equal.
/// * `optional_message` - An optional message to display if the assertion fails.
///
pub fn assert_float_eq(a: f64, b: f64, epsilon: f64, optional_message: Option<&str>) {
    match optional_message {
        Some(message) => assert!((a - b).abs() < epsilon, "a: {:?},\nb: {:?},\nepsilon: {:?},\n message: {:?}", a, b, epsilon, message),
        None => assert!((a - b).abs() < epsilon, "Expected {} to be approximately equal to {} (epsilon: {})", a, b, epsilon),
    }
}

#[cfg(test)]
pub(crate) fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
