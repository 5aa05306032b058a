use crate::constants_config::SolverConfig;

pub const DEFAULT_SOLVER_CONFIG: SolverConfig = SolverConfig {
    required_known_count: 3,
    dual_entry_tolerance: 1e-9,
    mirror_symmetric_speed: true,
};

/// Default step between trajectory samples, in seconds.
pub const DEFAULT_SAMPLE_INTERVAL: f64 = 0.1;

/// Upper bound on intermediate points returned by one trajectory sample.
pub const MAX_TRAJECTORY_SAMPLES: usize = 10_000;
