use std::f64::consts::PI;

/// Converts a launch angle in degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Elevation of a velocity vector above the horizontal, ignoring the component signs.
///
/// # Example
/// ```
/// use std::f64::consts::FRAC_PI_4;
/// use rs_kinematics::utils::elevation_from_components;
///
/// assert!((elevation_from_components(3.0, 3.0) - FRAC_PI_4).abs() < 1e-12);
/// assert!((elevation_from_components(3.0, -3.0) - FRAC_PI_4).abs() < 1e-12);
/// ```
#[inline]
pub fn elevation_from_components(i: f64, j: f64) -> f64 {
    (j / i).abs().atan()
}

/// Magnitude of an `(i, j)` velocity vector.
#[inline]
pub fn magnitude(i: f64, j: f64) -> f64 {
    i.hypot(j)
}

/// Displacement after `time` under constant acceleration: `v·t + ½·a·t²`.
#[inline]
pub fn displacement(initial_velocity: f64, acceleration: f64, time: f64) -> f64 {
    initial_velocity * time + 0.5 * acceleration * time * time
}
