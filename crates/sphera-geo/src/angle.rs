//! Degree/radian conversion with canonical range reduction.
//!
//! Both directions reduce into their canonical range: degrees into
//! `[0, 360)` and radians into `[0, 2*pi)`. Negative inputs wrap
//! (-10 degrees becomes 350 degrees), as do multiples of the full turn.

use ndarray::{ArrayD, ArrayViewD};

/// Converts degrees to radians, reducing into `[0, 2*pi)`.
pub fn deg2rad(deg: f64) -> f64 {
    deg.rem_euclid(360.0) / 180.0 * std::f64::consts::PI
}

/// Converts radians to degrees, reducing into `[0, 360)`.
pub fn rad2deg(rad: f64) -> f64 {
    (rad / std::f64::consts::PI * 180.0).rem_euclid(360.0)
}

/// Elementwise [`deg2rad`] over input of any shape.
pub fn deg2rad_array(deg: ArrayViewD<'_, f64>) -> ArrayD<f64> {
    deg.mapv(deg2rad)
}

/// Elementwise [`rad2deg`] over input of any shape.
pub fn rad2deg_array(rad: ArrayViewD<'_, f64>) -> ArrayD<f64> {
    rad.mapv(rad2deg)
}
