// src/solver/selector.rs

use log::{debug, warn};
use crate::constants_config::SolverConfig;
use crate::errors::KinematicsError;
use crate::quantities::{QuantityId, QuantitySet};
use crate::utils::{degrees_to_radians, elevation_from_components, magnitude};

/// The six quantities whose known/unknown pattern picks the equation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Control {
    InitialSpeed,
    FinalSpeed,
    Acceleration,
    Time,
    Range,
    MaxHeight,
}

impl Control {
    pub const ALL: [Control; 6] = [
        Control::InitialSpeed,
        Control::FinalSpeed,
        Control::Acceleration,
        Control::Time,
        Control::Range,
        Control::MaxHeight,
    ];

    pub fn quantity(self) -> QuantityId {
        match self {
            Control::InitialSpeed => QuantityId::InitialSpeed,
            Control::FinalSpeed => QuantityId::FinalSpeed,
            Control::Acceleration => QuantityId::Acceleration,
            Control::Time => QuantityId::Time,
            Control::Range => QuantityId::Range,
            Control::MaxHeight => QuantityId::MaxHeight,
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Bitmask over `Control`, one bit per unknown quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnknownMask(u8);

impl UnknownMask {
    pub fn of<I: IntoIterator<Item = Control>>(unknowns: I) -> Self {
        UnknownMask(unknowns.into_iter().fold(0, |mask, c| mask | c.bit()))
    }

    pub fn contains(self, control: Control) -> bool {
        self.0 & control.bit() != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn controls(self) -> Vec<Control> {
        Control::ALL.iter().copied().filter(|c| self.contains(*c)).collect()
    }
}

/// One closed-form equation set, named by the three quantities it solves for.
///
/// Variants are declared in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    TimeMaxHeightRange,
    TimeAccelerationRange,
    AccelerationInitialSpeedRange,
    FinalSpeedAccelerationRange,
    FinalSpeedTimeRange,
    InitialSpeedTimeRange,
    MaxHeightAccelerationRange,
    InitialSpeedRangeMaxHeight,
    RangeFinalSpeedMaxHeight,
    FinalSpeedInitialSpeedRange,
    MaxHeightTimeInitialSpeed,
    MaxHeightTimeFinalSpeed,
    MaxHeightTimeAcceleration,
    MaxHeightInitialSpeedFinalSpeed,
    MaxHeightInitialSpeedAcceleration,
    MaxHeightFinalSpeedAcceleration,
    TimeInitialSpeedFinalSpeed,
    TimeInitialSpeedAcceleration,
    TimeFinalSpeedAcceleration,
    InitialSpeedFinalSpeedAcceleration,
}

impl Branch {
    pub const ALL: [Branch; 20] = [
        Branch::TimeMaxHeightRange,
        Branch::TimeAccelerationRange,
        Branch::AccelerationInitialSpeedRange,
        Branch::FinalSpeedAccelerationRange,
        Branch::FinalSpeedTimeRange,
        Branch::InitialSpeedTimeRange,
        Branch::MaxHeightAccelerationRange,
        Branch::InitialSpeedRangeMaxHeight,
        Branch::RangeFinalSpeedMaxHeight,
        Branch::FinalSpeedInitialSpeedRange,
        Branch::MaxHeightTimeInitialSpeed,
        Branch::MaxHeightTimeFinalSpeed,
        Branch::MaxHeightTimeAcceleration,
        Branch::MaxHeightInitialSpeedFinalSpeed,
        Branch::MaxHeightInitialSpeedAcceleration,
        Branch::MaxHeightFinalSpeedAcceleration,
        Branch::TimeInitialSpeedFinalSpeed,
        Branch::TimeInitialSpeedAcceleration,
        Branch::TimeFinalSpeedAcceleration,
        Branch::InitialSpeedFinalSpeedAcceleration,
    ];

    /// The three quantities this branch computes.
    pub fn unknowns(self) -> [Control; 3] {
        use Control::*;
        match self {
            Branch::TimeMaxHeightRange => [Time, MaxHeight, Range],
            Branch::TimeAccelerationRange => [Time, Acceleration, Range],
            Branch::AccelerationInitialSpeedRange => [Acceleration, InitialSpeed, Range],
            Branch::FinalSpeedAccelerationRange => [FinalSpeed, Acceleration, Range],
            Branch::FinalSpeedTimeRange => [FinalSpeed, Time, Range],
            Branch::InitialSpeedTimeRange => [InitialSpeed, Time, Range],
            Branch::MaxHeightAccelerationRange => [MaxHeight, Acceleration, Range],
            Branch::InitialSpeedRangeMaxHeight => [InitialSpeed, Range, MaxHeight],
            Branch::RangeFinalSpeedMaxHeight => [Range, FinalSpeed, MaxHeight],
            Branch::FinalSpeedInitialSpeedRange => [FinalSpeed, InitialSpeed, Range],
            Branch::MaxHeightTimeInitialSpeed => [MaxHeight, Time, InitialSpeed],
            Branch::MaxHeightTimeFinalSpeed => [MaxHeight, Time, FinalSpeed],
            Branch::MaxHeightTimeAcceleration => [MaxHeight, Time, Acceleration],
            Branch::MaxHeightInitialSpeedFinalSpeed => [MaxHeight, InitialSpeed, FinalSpeed],
            Branch::MaxHeightInitialSpeedAcceleration => [MaxHeight, InitialSpeed, Acceleration],
            Branch::MaxHeightFinalSpeedAcceleration => [MaxHeight, FinalSpeed, Acceleration],
            Branch::TimeInitialSpeedFinalSpeed => [Time, InitialSpeed, FinalSpeed],
            Branch::TimeInitialSpeedAcceleration => [Time, InitialSpeed, Acceleration],
            Branch::TimeFinalSpeedAcceleration => [Time, FinalSpeed, Acceleration],
            Branch::InitialSpeedFinalSpeedAcceleration => [InitialSpeed, FinalSpeed, Acceleration],
        }
    }

    pub fn mask(self) -> UnknownMask {
        UnknownMask::of(self.unknowns())
    }

    /// The first branch, in priority order, whose unknowns are exactly `mask`.
    pub fn for_unknowns(mask: UnknownMask) -> Option<Branch> {
        Branch::ALL.iter().copied().find(|branch| branch.mask() == mask)
    }
}

/// Everything the formulas read: the effective launch angle and the controlling values,
/// `None` where unknown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchState {
    /// Effective launch angle in radians.
    pub theta: f64,
    pub initial_height: f64,
    values: [Option<f64>; 6],
    derived: [bool; 6],
}

impl LaunchState {
    pub fn get(&self, control: Control) -> Option<f64> {
        self.values[control as usize]
    }

    /// Whether the value was filled in during normalisation rather than provided.
    pub fn is_derived(&self, control: Control) -> bool {
        self.derived[control as usize]
    }

    pub fn unknowns(&self) -> UnknownMask {
        UnknownMask::of(Control::ALL.into_iter().filter(|c| self.get(*c).is_none()))
    }

    fn fill(&mut self, control: Control, value: f64) {
        self.values[control as usize] = Some(value);
        self.derived[control as usize] = true;
    }
}

/// Derives the effective launch angle and fills in speeds that follow from other inputs.
///
/// θ comes from the initial velocity vector when one is given, else from the final vector,
/// else from the angle in degrees. A given vector also supplies any missing scalar speed.
/// While more than three unknowns remain, a lone speed is mirrored onto the other one, or with
/// no speed at all one is derived from θ and two other knowns.
pub fn normalize(set: &QuantitySet, config: &SolverConfig) -> LaunchState {
    let initial_vector = vector(set, QuantityId::VInitialI, QuantityId::VInitialJ);
    let final_vector = vector(set, QuantityId::VFinalI, QuantityId::VFinalJ);

    let theta = match initial_vector.or(final_vector) {
        Some((i, j)) => elevation_from_components(i, j),
        None => degrees_to_radians(set.provided(QuantityId::Angle).unwrap_or(0.0)),
    };

    let mut state = LaunchState {
        theta,
        initial_height: set.provided(QuantityId::YInitial).unwrap_or(0.0),
        values: Control::ALL.map(|c| set.provided(c.quantity())),
        derived: [false; 6],
    };

    // Validation guarantees both vectors agree when both are given.
    if let Some((i, j)) = initial_vector.or(final_vector) {
        let speed = magnitude(i, j);
        for control in [Control::InitialSpeed, Control::FinalSpeed] {
            if state.get(control).is_none() {
                warn!("Deriving {} = {} from the velocity vector", control.quantity(), speed);
                state.fill(control, speed);
            }
        }
    }

    if config.mirror_symmetric_speed && state.unknowns().len() > 3 {
        match (state.get(Control::InitialSpeed), state.get(Control::FinalSpeed)) {
            (Some(v), None) => {
                warn!("Assuming a level trajectory: final_speed = initial_speed = {}", v);
                state.fill(Control::FinalSpeed, v);
            }
            (None, Some(v)) => {
                warn!("Assuming a level trajectory: initial_speed = final_speed = {}", v);
                state.fill(Control::InitialSpeed, v);
            }
            (None, None) => {
                if let Some(v) = speed_from_launch(&state) {
                    warn!("Assuming a level trajectory: initial_speed = {} from the launch angle", v);
                    state.fill(Control::InitialSpeed, v);
                }
            }
            (Some(_), Some(_)) => {}
        }
    }

    debug!("Launch state: theta = {} rad, unknowns = {:?}", state.theta, state.unknowns().controls());
    state
}

/// Initial speed of a level trajectory fixed by θ and two other known quantities.
///
/// Only called with no speed known and at most two other controlling quantities known.
/// Range and max height alone do not fix the speed.
fn speed_from_launch(state: &LaunchState) -> Option<f64> {
    let (s, c) = state.theta.sin_cos();
    let speed = match (
        state.get(Control::Acceleration),
        state.get(Control::Time),
        state.get(Control::Range),
        state.get(Control::MaxHeight),
    ) {
        (Some(acc), Some(time), _, _) => -acc * time / (2.0 * s),
        (Some(acc), None, Some(range), _) => (-acc * range / (2.0 * s * c)).sqrt(),
        (Some(acc), None, None, Some(h)) => (-2.0 * acc * h).sqrt() / s,
        (None, Some(time), Some(range), _) => range / (time * c),
        (None, Some(time), None, Some(h)) => 4.0 * h / (time * s),
        _ => return None,
    };
    Some(speed).filter(|v| v.is_finite() && *v > 0.0)
}

fn vector(set: &QuantitySet, i: QuantityId, j: QuantityId) -> Option<(f64, f64)> {
    match (set.provided(i), set.provided(j)) {
        (Some(i), Some(j)) if i != 0.0 => Some((i, j)),
        _ => None,
    }
}

/// Picks the equation set for the current unknowns.
///
/// # Errors
/// `NoBranchMatched` unless exactly three controlling quantities are unknown.
///
/// # Example
/// ```
/// use rs_kinematics::constants_config::SolverConfig;
/// use rs_kinematics::quantities::{QuantityId, QuantitySet};
/// use rs_kinematics::solver::{normalize, select, Branch};
///
/// let mut set = QuantitySet::new();
/// set.set(QuantityId::InitialSpeed, 20.0);
/// set.set(QuantityId::Acceleration, -9.8);
/// set.set(QuantityId::Time, 2.0);
///
/// let state = normalize(&set, &SolverConfig::default());
/// assert_eq!(select(&state).unwrap(), Branch::RangeFinalSpeedMaxHeight);
/// ```
pub fn select(state: &LaunchState) -> Result<Branch, KinematicsError> {
    let unknowns = state.unknowns();
    let branch = if unknowns.len() == 3 { Branch::for_unknowns(unknowns) } else { None };
    match branch {
        Some(branch) => {
            debug!("Selected branch {:?}", branch);
            Ok(branch)
        }
        None => Err(KinematicsError::NoBranchMatched {
            unknowns: unknowns.controls().into_iter().map(Control::quantity).collect(),
        }),
    }
}
