// src/solver/trajectory.rs

use crate::errors::KinematicsError;
use crate::solver::Solution;
use crate::utils::{displacement, MAX_TRAJECTORY_SAMPLES};

/// One sampled point of a solved flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    pub time: f64,
    pub x: f64,
    pub y: f64,
}

/// Position over time of a solved projectile, with x measured from the launch point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trajectory {
    vx: f64,
    vy: f64,
    acceleration: f64,
    initial_height: f64,
    flight_time: f64,
}

impl Trajectory {
    pub fn new(solution: &Solution) -> Self {
        let (s, c) = solution.theta.sin_cos();
        Self {
            vx: solution.initial_speed * c,
            vy: solution.initial_speed * s,
            acceleration: solution.acceleration,
            initial_height: solution.initial_height,
            flight_time: solution.time,
        }
    }

    pub fn flight_time(&self) -> f64 {
        self.flight_time
    }

    /// # Example
    /// ```
    /// use rs_kinematics::apis::session::Session;
    /// use rs_kinematics::quantities::QuantityId;
    ///
    /// let mut session = Session::new();
    /// session.set_quantity(QuantityId::InitialSpeed, 20.0);
    /// session.set_quantity(QuantityId::Angle, 90.0);
    /// session.set_quantity(QuantityId::Acceleration, -10.0);
    /// session.resolve();
    ///
    /// let trajectory = session.trajectory().unwrap();
    /// let apex = trajectory.position_at(2.0);
    /// assert!((apex.y - 20.0).abs() < 1e-9);
    /// ```
    pub fn position_at(&self, time: f64) -> TrajectoryPoint {
        TrajectoryPoint {
            time,
            x: self.vx * time,
            y: self.initial_height + displacement(self.vy, self.acceleration, time),
        }
    }

    /// Samples the flight every `interval` seconds until it lands or the flight time runs out.
    /// The last point is always the landing point; a non-positive interval yields only the
    /// launch and landing points. Intervals finer than `flight_time / MAX_TRAJECTORY_SAMPLES`
    /// are widened to it.
    pub fn sample(&self, interval: f64) -> Vec<TrajectoryPoint> {
        let mut points = vec![self.position_at(0.0)];
        if interval > 0.0 {
            let interval = interval.max(self.flight_time / MAX_TRAJECTORY_SAMPLES as f64);
            for step in 1..=MAX_TRAJECTORY_SAMPLES {
                let t = interval * step as f64;
                if t >= self.flight_time {
                    break;
                }
                let point = self.position_at(t);
                if point.y < 0.0 {
                    break;
                }
                points.push(point);
            }
        }
        points.push(self.position_at(self.flight_time));
        points
    }
}

impl TryFrom<Option<&Solution>> for Trajectory {
    type Error = KinematicsError;

    fn try_from(solution: Option<&Solution>) -> Result<Self, Self::Error> {
        solution.map(Trajectory::new).ok_or(KinematicsError::NotSolved)
    }
}
