// src/constants_config.rs
use crate::utils::DEFAULT_SOLVER_CONFIG;

/// Tunables for a resolve pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// How many required known quantities one kinematics table needs before solving.
    pub required_known_count: usize,
    /// Relative tolerance when comparing two representations of the same value.
    pub dual_entry_tolerance: f64,
    /// Apply the level-trajectory fallbacks when more than three unknowns remain: copy a lone
    /// initial or final speed onto the other, or derive the initial speed from the angle.
    pub mirror_symmetric_speed: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        DEFAULT_SOLVER_CONFIG
    }
}

impl SolverConfig {
    /// # Example
    /// ```
    /// use rs_kinematics::constants_config::SolverConfig;
    ///
    /// let config = SolverConfig::new(None, Some(1e-6), None);
    /// assert_eq!(config.required_known_count, 3);
    /// assert_eq!(config.dual_entry_tolerance, 1e-6);
    /// assert!(config.mirror_symmetric_speed);
    /// ```
    pub fn new(
        required_known_count: Option<usize>,
        dual_entry_tolerance: Option<f64>,
        mirror_symmetric_speed: Option<bool>,
    ) -> Self {
        let default = DEFAULT_SOLVER_CONFIG;
        Self {
            required_known_count: required_known_count.unwrap_or(default.required_known_count),
            dual_entry_tolerance: dual_entry_tolerance.unwrap_or(default.dual_entry_tolerance),
            mirror_symmetric_speed: mirror_symmetric_speed.unwrap_or(default.mirror_symmetric_speed),
        }
    }

    /// Relative equality used for the cross-representation checks.
    pub fn same_value(&self, a: f64, b: f64) -> bool {
        approx::relative_eq!(a, b, epsilon = f64::EPSILON, max_relative = self.dual_entry_tolerance)
    }
}
