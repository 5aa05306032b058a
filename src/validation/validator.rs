// src/validation/validator.rs

use log::debug;
use crate::constants_config::SolverConfig;
use crate::errors::KinematicsError;
use crate::quantities::{KnownSet, QuantityId, QuantitySet};
use crate::utils::magnitude;

/// Pairs that describe the same value twice and must agree when both are provided.
const DUAL_ENTRIES: [(QuantityId, QuantityId); 3] = [
    (QuantityId::InitialSpeed, QuantityId::FinalSpeed),
    (QuantityId::VInitialI, QuantityId::VFinalI),
    (QuantityId::VInitialJ, QuantityId::VFinalJ),
];

const SPEEDS: [QuantityId; 2] = [QuantityId::InitialSpeed, QuantityId::FinalSpeed];

const VELOCITY_VECTORS: [(QuantityId, QuantityId); 2] = [
    (QuantityId::VInitialI, QuantityId::VInitialJ),
    (QuantityId::VFinalI, QuantityId::VFinalJ),
];

/// How many required known quantities each kinematics table holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequiredCounts {
    pub scalar: usize,
    pub vector: usize,
}

/// Checks bounds, dependencies, cross-representation agreement and input count.
///
/// # Arguments
/// * `set` - The quantities to validate. Only provided values are inspected.
/// * `config` - Threshold and tolerance settings.
///
/// # Returns
/// The known-set the selector works from.
///
/// # Errors
/// The first failure found, in this order: `OutOfRange` (registry order), `MissingDependency`,
/// `InconsistentDualEntry`, `InsufficientInputs`.
///
/// # Example
/// ```
/// use rs_kinematics::constants_config::SolverConfig;
/// use rs_kinematics::errors::KinematicsError;
/// use rs_kinematics::quantities::{QuantityId, QuantitySet};
/// use rs_kinematics::validation::validate;
///
/// let mut set = QuantitySet::new();
/// set.set(QuantityId::InitialSpeed, 1500.0);
///
/// let err = validate(&set, &SolverConfig::default()).unwrap_err();
/// assert!(matches!(err, KinematicsError::OutOfRange { quantity: QuantityId::InitialSpeed, .. }));
/// ```
pub fn validate(set: &QuantitySet, config: &SolverConfig) -> Result<KnownSet, KinematicsError> {
    check_ranges(set)?;
    let known = KnownSet::extract(set);
    check_dependencies(&known)?;
    let counts = count_required(&known);
    debug!("Required known counts: scalar = {}, vector = {}", counts.scalar, counts.vector);
    check_dual_entries(set, config)?;

    if counts.scalar < config.required_known_count && counts.vector < config.required_known_count {
        return Err(KinematicsError::InsufficientInputs {
            scalar_count: counts.scalar,
            vector_count: counts.vector,
        });
    }
    Ok(known)
}

/// Reports the first provided value outside its bounds.
pub fn check_ranges(set: &QuantitySet) -> Result<(), KinematicsError> {
    for (id, value) in set.iter() {
        let Some(value) = value.provided() else { continue };
        let spec = id.spec();
        if !spec.contains(value) {
            return Err(KinematicsError::OutOfRange {
                quantity: id,
                value,
                min: spec.min,
                max: spec.max,
            });
        }
    }
    Ok(())
}

/// Reports the first known quantity with an unknown dependency.
pub fn check_dependencies(known: &KnownSet) -> Result<(), KinematicsError> {
    for id in known.iter() {
        if let Some(&dependency) = id.spec().dependencies.iter().find(|dep| !known.contains(**dep)) {
            return Err(KinematicsError::MissingDependency { quantity: id, dependency });
        }
    }
    Ok(())
}

pub fn count_required(known: &KnownSet) -> RequiredCounts {
    known
        .iter()
        .map(QuantityId::spec)
        .filter(|spec| spec.required)
        .fold(RequiredCounts::default(), |mut counts, spec| {
            if spec.category.counts_as_scalar() {
                counts.scalar += 1;
            }
            if spec.category.counts_as_vector() {
                counts.vector += 1;
            }
            counts
        })
}

/// Initial/final pairs must be equal, and every scalar speed must match the magnitude of every
/// given velocity vector. The trajectory is level, so this holds across endpoints too.
pub fn check_dual_entries(set: &QuantitySet, config: &SolverConfig) -> Result<(), KinematicsError> {
    for (first, second) in DUAL_ENTRIES {
        if let (Some(a), Some(b)) = (set.provided(first), set.provided(second)) {
            if !config.same_value(a, b) {
                return Err(KinematicsError::InconsistentDualEntry {
                    first,
                    second,
                    first_value: a,
                    second_value: b,
                });
            }
        }
    }

    for speed in SPEEDS {
        let Some(s) = set.provided(speed) else { continue };
        for (i, j) in VELOCITY_VECTORS {
            if let (Some(vi), Some(vj)) = (set.provided(i), set.provided(j)) {
                let vector_speed = magnitude(vi, vj);
                if !config.same_value(s, vector_speed) {
                    return Err(KinematicsError::InconsistentDualEntry {
                        first: speed,
                        second: i,
                        first_value: s,
                        second_value: vector_speed,
                    });
                }
            }
        }
    }
    Ok(())
}
