// src/apis/session.rs

use log::{error, info};
use crate::constants_config::SolverConfig;
use crate::errors::KinematicsError;
use crate::quantities::{QuantityId, QuantitySet, QuantityValue};
use crate::solver::{normalize, select, solve_branch, Solution, Trajectory};
use crate::validation::validate;

/// Result of one `resolve` call.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    /// Every controlling quantity is filled in and consistent.
    Solved,
    /// Range, dependency, dual-entry, input-count or branch failure.
    ValidationError { message: String },
    /// The equations produced a physically invalid value.
    ImpossibleResult { message: String },
}

impl SolveOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            SolveOutcome::Solved => None,
            SolveOutcome::ValidationError { message } | SolveOutcome::ImpossibleResult { message } => Some(message),
        }
    }
}

impl From<&KinematicsError> for SolveOutcome {
    fn from(error: &KinematicsError) -> Self {
        let message = error.to_string();
        match error {
            KinematicsError::ImpossibleResult { .. } => SolveOutcome::ImpossibleResult { message },
            _ => SolveOutcome::ValidationError { message },
        }
    }
}

/// Where a session is in its validate, select, solve sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveState {
    Idle,
    Validating,
    Selecting,
    Solving,
    Error,
    ImpossibleResult,
    Solved,
}

/// Which input table the collaborator is showing. Switching tables clears the inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Scalar,
    Vector,
    Forces,
}

/// One independent set of quantities plus the outcome of its last resolve.
///
/// This is the whole contract offered to a presentation layer: set values, resolve, read
/// back, reset.
///
/// # Example
/// ```
/// use rs_kinematics::apis::session::Session;
/// use rs_kinematics::quantities::QuantityId;
///
/// let mut session = Session::new();
/// session.set_quantity(QuantityId::InitialSpeed, 20.0);
/// session.set_quantity(QuantityId::Acceleration, -9.8);
///
/// assert!(session.resolve().is_solved());
/// assert!(session.value(QuantityId::Range).unwrap() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    quantities: QuantitySet,
    config: SolverConfig,
    mode: InputMode,
    state: SolveState,
    solved: bool,
    error_message: String,
    solution: Option<Solution>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            quantities: QuantitySet::new(),
            config,
            mode: InputMode::default(),
            state: SolveState::Idle,
            solved: false,
            error_message: String::new(),
            solution: None,
        }
    }

    /// Stores a provided value. Nothing is validated until `resolve`.
    pub fn set_quantity(&mut self, id: QuantityId, value: f64) {
        self.quantities.set(id, value);
    }

    pub fn unset_quantity(&mut self, id: QuantityId) {
        self.quantities.unset(id);
    }

    pub fn value(&self, id: QuantityId) -> Option<f64> {
        self.quantities.value(id)
    }

    pub fn quantity(&self, id: QuantityId) -> QuantityValue {
        self.quantities.get(id)
    }

    pub fn quantities(&self) -> &QuantitySet {
        &self.quantities
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn state(&self) -> SolveState {
        self.state
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// Builds the flight path of the last successful solve.
    ///
    /// # Errors
    /// `NotSolved` if the last resolve did not succeed.
    pub fn trajectory(&self) -> Result<Trajectory, KinematicsError> {
        if !self.solved {
            return Err(KinematicsError::NotSolved);
        }
        Trajectory::try_from(self.solution.as_ref())
    }

    /// Restores every quantity to its default and returns to `Idle`.
    pub fn reset(&mut self) {
        self.quantities.reset();
        self.state = SolveState::Idle;
        self.solved = false;
        self.error_message.clear();
        self.solution = None;
    }

    /// Changes the input table, clearing all inputs if it differs from the current one.
    pub fn switch_mode(&mut self, mode: InputMode) {
        if self.mode != mode {
            self.reset();
            self.mode = mode;
        }
    }

    /// Runs validate, select, solve and publish.
    ///
    /// On success the computed quantities are written back as derived values and the solved
    /// flag is set. On failure the quantities are left as they were, the solved flag is cleared
    /// and the message describes the first problem found.
    pub fn resolve(&mut self) -> SolveOutcome {
        match self.try_resolve() {
            Ok(_) => SolveOutcome::Solved,
            Err(e) => SolveOutcome::from(&e),
        }
    }

    /// Like `resolve`, but hands back the typed error instead of a message.
    pub fn try_resolve(&mut self) -> Result<Solution, KinematicsError> {
        match self.run() {
            Ok(solution) => {
                self.publish(&solution);
                info!(
                    "Solved with {:?}: time = {}, range = {}, max_height = {}",
                    solution.branch, solution.time, solution.range, solution.max_height
                );
                Ok(solution)
            }
            Err(e) => {
                error!("Resolve failed: {}", e);
                self.state = match e {
                    KinematicsError::ImpossibleResult { .. } => SolveState::ImpossibleResult,
                    _ => SolveState::Error,
                };
                self.solved = false;
                self.error_message = e.to_string();
                self.solution = None;
                Err(e)
            }
        }
    }

    fn run(&mut self) -> Result<Solution, KinematicsError> {
        self.state = SolveState::Validating;
        validate(&self.quantities, &self.config)?;

        self.state = SolveState::Selecting;
        let launch = normalize(&self.quantities, &self.config);
        let branch = select(&launch)?;

        self.state = SolveState::Solving;
        solve_branch(branch, &launch)
    }

    fn publish(&mut self, solution: &Solution) {
        self.quantities.clear_derived();
        for (id, value) in solution.published() {
            self.quantities.set_derived(id, value);
        }
        self.state = SolveState::Solved;
        self.solved = true;
        self.error_message.clear();
        self.solution = Some(*solution);
    }
}
