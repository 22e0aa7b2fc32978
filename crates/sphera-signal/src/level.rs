//! Amplitude/power to decibel conversion and RMS energy estimation.
//!
//! The decibel mappings follow IEEE float semantics for their edge cases:
//! a zero amplitude converts to negative infinity, not an error. Callers
//! decide whether infinite or NaN levels are acceptable downstream.

use ndarray::{Array1, ArrayD, ArrayView1, ArrayView2, ArrayViewD, Axis};
use num_complex::Complex64;

/// Converts a ratio to decibel: `20*log10(|x|)`, or `10*log10(|x|)` when
/// `power` is set (the input already being a power quantity).
///
/// `x = 0` yields negative infinity.
pub fn to_db(x: f64, power: bool) -> f64 {
    let factor = if power { 10.0 } else { 20.0 };
    factor * x.abs().log10()
}

/// Converts decibel back to a ratio: the inverse of [`to_db`].
pub fn from_db(db: f64, power: bool) -> f64 {
    let divisor = if power { 10.0 } else { 20.0 };
    10.0_f64.powf(db / divisor)
}

/// Elementwise [`to_db`] over input of any shape.
pub fn to_db_array(x: ArrayViewD<'_, f64>, power: bool) -> ArrayD<f64> {
    x.mapv(|v| to_db(v, power))
}

/// Elementwise [`from_db`] over input of any shape.
pub fn from_db_array(db: ArrayViewD<'_, f64>, power: bool) -> ArrayD<f64> {
    db.mapv(|v| from_db(v, power))
}

/// Root-mean-square of a real signal window: `sqrt(mean(x^2))`.
///
/// An empty window divides zero by zero and returns NaN.
pub fn rms(x: ArrayView1<'_, f64>) -> f64 {
    let energy: f64 = x.iter().map(|&v| v * v).sum();
    (energy / x.len() as f64).sqrt()
}

/// Root-mean-square of a complex signal window: `sqrt(mean(x*conj(x)))`.
///
/// The conjugate product is real, so the result is a real amplitude.
pub fn rms_complex(x: ArrayView1<'_, Complex64>) -> f64 {
    let energy: f64 = x.iter().map(|v| (v * v.conj()).re).sum();
    (energy / x.len() as f64).sqrt()
}

/// RMS of a real matrix along the given axis, the other axis preserved.
///
/// For a channels-by-samples matrix, `Axis(1)` (the samples axis) yields
/// one RMS value per channel.
pub fn rms_axis(x: ArrayView2<'_, f64>, axis: Axis) -> Array1<f64> {
    x.map_axis(axis, |lane| rms(lane))
}

/// RMS of a complex matrix along the given axis, the other axis preserved.
pub fn rms_axis_complex(x: ArrayView2<'_, Complex64>, axis: Axis) -> Array1<f64> {
    x.map_axis(axis, |lane| rms_complex(lane))
}
