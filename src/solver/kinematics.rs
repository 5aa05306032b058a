// src/solver/kinematics.rs

use log::debug;
use crate::errors::KinematicsError;
use crate::quantities::QuantityId;
use crate::solver::{Branch, Control, LaunchState};

/// All controlling quantities after a successful branch, plus the two always-derived ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub branch: Branch,
    /// Effective launch angle in radians.
    pub theta: f64,
    pub initial_height: f64,
    pub initial_speed: f64,
    pub final_speed: f64,
    pub acceleration: f64,
    pub time: f64,
    pub range: f64,
    pub max_height: f64,
    pub abs_max_height: f64,
    pub apex_time: f64,
}

impl Solution {
    pub fn get(&self, control: Control) -> f64 {
        match control {
            Control::InitialSpeed => self.initial_speed,
            Control::FinalSpeed => self.final_speed,
            Control::Acceleration => self.acceleration,
            Control::Time => self.time,
            Control::Range => self.range,
            Control::MaxHeight => self.max_height,
        }
    }

    /// Every value the solver may publish, keyed by quantity.
    pub fn published(&self) -> [(QuantityId, f64); 8] {
        [
            (QuantityId::InitialSpeed, self.initial_speed),
            (QuantityId::FinalSpeed, self.final_speed),
            (QuantityId::Acceleration, self.acceleration),
            (QuantityId::Time, self.time),
            (QuantityId::Range, self.range),
            (QuantityId::MaxHeight, self.max_height),
            (QuantityId::AbsMaxHeight, self.abs_max_height),
            (QuantityId::ApexTime, self.apex_time),
        ]
    }
}

/// Working values for one branch; unknowns start as `None` and are filled in by the formulas.
struct Unknowns {
    v: Option<f64>,
    v_final: Option<f64>,
    acc: Option<f64>,
    time: Option<f64>,
    range: Option<f64>,
    max_height: Option<f64>,
}

fn known(value: Option<f64>, control: Control, branch: Branch) -> Result<f64, KinematicsError> {
    value.ok_or_else(|| KinematicsError::NoBranchMatched {
        unknowns: branch.unknowns().iter().copied().chain([control]).map(Control::quantity).collect(),
    })
}

/// Vertical displacement at the apex of a level trajectory lasting `time`.
fn apex_height(vertical_speed: f64, acc: f64, time: f64) -> f64 {
    let half = time / 2.0;
    vertical_speed * half + 0.5 * acc * half * half
}

/// Runs the closed-form equations of `branch` and checks the result is physical.
///
/// The trajectory is level: it lands at launch height, so the apex is reached at half the
/// flight time and the final speed equals the initial speed. Acceleration is negative.
///
/// # Errors
/// * `ImpossibleResult` if the computed max height is negative or any value is not finite.
/// * `NoBranchMatched` if an input the branch reads is still unknown.
///
/// # Example
/// ```
/// use rs_kinematics::constants_config::SolverConfig;
/// use rs_kinematics::quantities::{QuantityId, QuantitySet};
/// use rs_kinematics::solver::{normalize, select, solve_branch};
///
/// let mut set = QuantitySet::new();
/// set.set(QuantityId::InitialSpeed, 20.0);
/// set.set(QuantityId::Angle, 90.0);
/// set.set(QuantityId::Acceleration, -10.0);
///
/// let state = normalize(&set, &SolverConfig::default());
/// let branch = select(&state).unwrap();
/// let solution = solve_branch(branch, &state).unwrap();
/// assert!((solution.time - 4.0).abs() < 1e-9);
/// assert!((solution.max_height - 20.0).abs() < 1e-9);
/// assert!((solution.apex_time - 4.0).abs() < 1e-9);
/// ```
pub fn solve_branch(branch: Branch, state: &LaunchState) -> Result<Solution, KinematicsError> {
    let (s, c) = state.theta.sin_cos();
    let mut u = Unknowns {
        v: state.get(Control::InitialSpeed),
        v_final: state.get(Control::FinalSpeed),
        acc: state.get(Control::Acceleration),
        time: state.get(Control::Time),
        range: state.get(Control::Range),
        max_height: state.get(Control::MaxHeight),
    };
    let k = |value: Option<f64>, control: Control| known(value, control, branch);

    match branch {
        Branch::TimeMaxHeightRange => {
            let (v, acc) = (k(u.v, Control::InitialSpeed)?, k(u.acc, Control::Acceleration)?);
            let time = -2.0 * v * s / acc;
            u.time = Some(time);
            u.max_height = Some(apex_height(v * s, acc, time));
            u.range = Some(v * c * time);
        }
        Branch::TimeAccelerationRange => {
            let (v, h) = (k(u.v, Control::InitialSpeed)?, k(u.max_height, Control::MaxHeight)?);
            let acc = -(v * s).powi(2) / (2.0 * h);
            let time = -2.0 * v * s / acc;
            u.acc = Some(acc);
            u.time = Some(time);
            u.range = Some(v * c * time);
        }
        Branch::AccelerationInitialSpeedRange => {
            let (v, time) = (k(u.v_final, Control::FinalSpeed)?, k(u.time, Control::Time)?);
            u.v = Some(v);
            u.acc = Some(-v * s / (time / 2.0));
            u.range = Some(v * c * time);
        }
        Branch::FinalSpeedAccelerationRange => {
            let (v, time) = (k(u.v, Control::InitialSpeed)?, k(u.time, Control::Time)?);
            u.v_final = Some(v);
            u.acc = Some(-v * s / (time / 2.0));
            u.range = Some(v * c * time);
        }
        Branch::FinalSpeedTimeRange => {
            let (v, acc) = (k(u.v, Control::InitialSpeed)?, k(u.acc, Control::Acceleration)?);
            let time = -v * s / (acc / 2.0);
            u.v_final = Some(v);
            u.time = Some(time);
            u.range = Some(v * c * time);
        }
        Branch::InitialSpeedTimeRange => {
            let (v, acc) = (k(u.v_final, Control::FinalSpeed)?, k(u.acc, Control::Acceleration)?);
            let time = -2.0 * v * s / acc;
            u.v = Some(v);
            u.time = Some(time);
            u.range = Some(v * c * time);
        }
        Branch::MaxHeightAccelerationRange => {
            let (v, time) = (k(u.v, Control::InitialSpeed)?, k(u.time, Control::Time)?);
            let acc = -v * s / (time / 2.0);
            u.acc = Some(acc);
            u.max_height = Some(apex_height(v * s, acc, time));
            u.range = Some(v * c * time);
        }
        Branch::InitialSpeedRangeMaxHeight => {
            let v = k(u.v_final, Control::FinalSpeed)?;
            let (acc, time) = (k(u.acc, Control::Acceleration)?, k(u.time, Control::Time)?);
            u.v = Some(v);
            u.range = Some(v * c * time);
            u.max_height = Some(apex_height(v * s, acc, time));
        }
        Branch::RangeFinalSpeedMaxHeight => {
            let v = k(u.v, Control::InitialSpeed)?;
            let (acc, time) = (k(u.acc, Control::Acceleration)?, k(u.time, Control::Time)?);
            u.v_final = Some(v);
            u.range = Some(v * c * time);
            u.max_height = Some(apex_height(v * s, acc, time));
        }
        Branch::FinalSpeedInitialSpeedRange => {
            let (acc, time) = (k(u.acc, Control::Acceleration)?, k(u.time, Control::Time)?);
            let h = k(u.max_height, Control::MaxHeight)?;
            let half = time / 2.0;
            let v = (h - 0.5 * acc * half * half) / (half * s);
            u.v = Some(v);
            u.v_final = Some(v);
            u.range = Some(v * c * time);
        }
        Branch::MaxHeightTimeInitialSpeed => {
            let (v, acc) = (k(u.v_final, Control::FinalSpeed)?, k(u.acc, Control::Acceleration)?);
            let time = -2.0 * v * s / acc;
            u.v = Some(v);
            u.time = Some(time);
            u.max_height = Some(apex_height(v * s, acc, time));
        }
        Branch::MaxHeightTimeFinalSpeed => {
            let (v, acc) = (k(u.v, Control::InitialSpeed)?, k(u.acc, Control::Acceleration)?);
            let time = -2.0 * v * s / acc;
            u.v_final = Some(v);
            u.time = Some(time);
            u.max_height = Some(apex_height(v * s, acc, time));
        }
        Branch::MaxHeightTimeAcceleration => {
            let (v, range) = (k(u.v, Control::InitialSpeed)?, k(u.range, Control::Range)?);
            let time = range / (v * c);
            let acc = -v * s / (time / 2.0);
            u.time = Some(time);
            u.acc = Some(acc);
            u.max_height = Some(apex_height(v * s, acc, time));
        }
        Branch::MaxHeightInitialSpeedFinalSpeed => {
            let (range, time) = (k(u.range, Control::Range)?, k(u.time, Control::Time)?);
            let acc = k(u.acc, Control::Acceleration)?;
            let v = range / (time * c);
            u.v = Some(v);
            u.v_final = Some(v);
            u.max_height = Some(apex_height(v * s, acc, time));
        }
        Branch::MaxHeightInitialSpeedAcceleration => {
            let (v, time) = (k(u.v_final, Control::FinalSpeed)?, k(u.time, Control::Time)?);
            let acc = -v * s / (time / 2.0);
            u.v = Some(v);
            u.acc = Some(acc);
            u.max_height = Some(apex_height(v * s, acc, time));
        }
        Branch::MaxHeightFinalSpeedAcceleration => {
            let (v, time) = (k(u.v, Control::InitialSpeed)?, k(u.time, Control::Time)?);
            let acc = -v * s / (time / 2.0);
            u.v_final = Some(v);
            u.acc = Some(acc);
            u.max_height = Some(apex_height(v * s, acc, time));
        }
        Branch::TimeInitialSpeedFinalSpeed => {
            let (acc, h) = (k(u.acc, Control::Acceleration)?, k(u.max_height, Control::MaxHeight)?);
            let vertical_speed = (-2.0 * acc * h).sqrt();
            let v = vertical_speed / s;
            u.v = Some(v);
            u.v_final = Some(v);
            u.time = Some(-2.0 * vertical_speed / acc);
        }
        Branch::TimeInitialSpeedAcceleration => {
            let (v, range) = (k(u.v_final, Control::FinalSpeed)?, k(u.range, Control::Range)?);
            let time = range / (v * c);
            u.v = Some(v);
            u.time = Some(time);
            u.acc = Some(-v * s / (time / 2.0));
        }
        Branch::TimeFinalSpeedAcceleration => {
            let (v, range) = (k(u.v, Control::InitialSpeed)?, k(u.range, Control::Range)?);
            let time = range / (v * c);
            u.v_final = Some(v);
            u.time = Some(time);
            u.acc = Some(-v * s / (time / 2.0));
        }
        Branch::InitialSpeedFinalSpeedAcceleration => {
            let (range, time) = (k(u.range, Control::Range)?, k(u.time, Control::Time)?);
            let v = range / (time * c);
            u.v = Some(v);
            u.v_final = Some(v);
            u.acc = Some(-v * s / (time / 2.0));
        }
    }

    let initial_speed = k(u.v, Control::InitialSpeed)?;
    let acceleration = k(u.acc, Control::Acceleration)?;
    let max_height = k(u.max_height, Control::MaxHeight)?;
    let solution = Solution {
        branch,
        theta: state.theta,
        initial_height: state.initial_height,
        initial_speed,
        final_speed: k(u.v_final, Control::FinalSpeed)?,
        acceleration,
        time: k(u.time, Control::Time)?,
        range: k(u.range, Control::Range)?,
        max_height,
        abs_max_height: state.initial_height + max_height,
        apex_time: -(initial_speed * s) / (acceleration / 2.0),
    };
    debug!("{:?} produced {:?}", branch, solution);

    check_physical(&solution)?;
    Ok(solution)
}

/// Negative heights and non-finite values mean the inputs contradict each other.
fn check_physical(solution: &Solution) -> Result<(), KinematicsError> {
    if let Some(&(quantity, value)) = solution.published().iter().find(|(_, value)| !value.is_finite()) {
        return Err(KinematicsError::ImpossibleResult { quantity, value });
    }
    if solution.max_height < 0.0 {
        return Err(KinematicsError::ImpossibleResult {
            quantity: QuantityId::MaxHeight,
            value: solution.max_height,
        });
    }
    Ok(())
}
