pub mod session;
#[cfg(feature = "batch")]
pub mod batch;

#[cfg(test)]
mod session_tests;
