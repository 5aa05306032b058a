use std::fmt;
use std::error::Error;
use crate::quantities::QuantityId;

/// Represents everything that can stop a resolve pass.
#[derive(Debug, Clone, PartialEq)]
pub enum KinematicsError {
    /// A provided value lies outside its declared inclusive bounds.
    OutOfRange {
        quantity: QuantityId,
        value: f64,
        min: f64,
        max: f64,
    },
    /// A provided quantity needs another quantity that was not provided.
    MissingDependency {
        quantity: QuantityId,
        dependency: QuantityId,
    },
    /// Two representations of the same physical fact disagree.
    InconsistentDualEntry {
        first: QuantityId,
        second: QuantityId,
        first_value: f64,
        second_value: f64,
    },
    /// Neither kinematics table reached the required number of known quantities.
    InsufficientInputs {
        scalar_count: usize,
        vector_count: usize,
    },
    /// The unknown controlling quantities do not form one of the solvable combinations.
    NoBranchMatched {
        unknowns: Vec<QuantityId>,
    },
    /// The algebra produced a physically invalid value.
    ImpossibleResult {
        quantity: QuantityId,
        value: f64,
    },
    /// A string did not name any registered quantity.
    UnknownQuantity(String),
    /// Trajectory data was requested before a successful solve.
    NotSolved,
}

fn join_names(ids: &[QuantityId]) -> String {
    ids.iter().map(|id| id.name()).collect::<Vec<_>>().join(", ")
}

impl fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KinematicsError::OutOfRange { quantity, value, min, max } => write!(
                f,
                "Parameter: {} with value: {} is not within allowed range [{}, {}]",
                quantity, value, min, max
            ),
            KinematicsError::MissingDependency { quantity, dependency } => write!(
                f,
                "Missing required dependency for parameter: {}: dependency {} not provided",
                quantity, dependency
            ),
            KinematicsError::InconsistentDualEntry { first, second, first_value, second_value } => write!(
                f,
                "{} ({}) and {} ({}) are not the same",
                first, first_value, second, second_value
            ),
            KinematicsError::InsufficientInputs { scalar_count, vector_count } => write!(
                f,
                "Not enough required inputs. Required scalar count = {}, required vector count = {}",
                scalar_count, vector_count
            ),
            KinematicsError::NoBranchMatched { unknowns } => write!(
                f,
                "No equation set solves for the unknowns [{}]; exactly three of initial_speed, final_speed, acc, time, range, max_height must be unknown",
                join_names(unknowns)
            ),
            KinematicsError::ImpossibleResult { quantity, value } => write!(
                f,
                "Inconsistent values: calculated {} is {}",
                quantity, value
            ),
            KinematicsError::UnknownQuantity(name) => write!(f, "Unknown quantity: {}", name),
            KinematicsError::NotSolved => write!(f, "Can not build a trajectory without solved values"),
        }
    }
}

impl Error for KinematicsError {}
