//! Diagnostic comparison of two arrays.
//!
//! Advisory only: reports how far apart two arrays are, for validating
//! reference signals and debugging processing chains. Never use the
//! result for correctness enforcement.

use ndarray::ArrayViewD;

use crate::error::{Result, SignalError};

/// Default tolerance below which two arrays count as matching.
pub const DIFF_TOLERANCE: f64 = 1e-6;

/// Cumulative absolute element-wise difference between two arrays.
///
/// Both inputs are flattened in row-major order and must then hold the
/// same number of elements. When `verbose`, the outcome is reported via
/// `tracing` — a warning when the difference exceeds `tolerance`, an info
/// event otherwise, tagged with `label` when given. The difference is
/// returned either way.
///
/// # Errors
///
/// Returns [`SignalError::LengthMismatch`] when the flattened inputs
/// disagree in element count.
pub fn compare_arrays(
    v1: ArrayViewD<'_, f64>,
    v2: ArrayViewD<'_, f64>,
    label: Option<&str>,
    tolerance: f64,
    verbose: bool,
) -> Result<f64> {
    if v1.len() != v2.len() {
        return Err(SignalError::LengthMismatch {
            left: v1.len(),
            right: v2.len(),
        });
    }

    let diff: f64 = v1
        .iter()
        .zip(v2.iter())
        .map(|(a, b)| (a - b).abs())
        .sum();

    if verbose {
        let label = label.unwrap_or("compare");
        if diff > tolerance {
            tracing::warn!(label, diff, tolerance, "arrays differ beyond tolerance");
        } else {
            tracing::info!(label, diff, "close enough");
        }
    }

    Ok(diff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    #[test]
    fn test_identical_arrays_have_zero_diff() {
        let v = arr1(&[1.0, 2.0, 3.0]);
        let d = compare_arrays(v.view().into_dyn(), v.view().into_dyn(), None, DIFF_TOLERANCE, false)
            .unwrap();
        assert_eq!(d, 0.0);
    }

    #[test]
    fn test_diff_accumulates_elementwise() {
        let v1 = arr1(&[1.0, 2.0, 3.0]);
        let v2 = arr1(&[1.5, 1.0, 3.25]);
        let d = compare_arrays(v1.view().into_dyn(), v2.view().into_dyn(), None, DIFF_TOLERANCE, false)
            .unwrap();
        assert!((d - 1.75).abs() < 1e-12);
    }

    #[test]
    fn test_shapes_flatten_before_comparison() {
        // A 2x3 matrix against the equivalent flat sequence compares equal.
        let m = arr2(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let flat = arr1(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let d = compare_arrays(m.view().into_dyn(), flat.view().into_dyn(), None, DIFF_TOLERANCE, false)
            .unwrap();
        assert_eq!(d, 0.0);
    }

    #[test]
    fn test_element_count_mismatch() {
        let v1 = arr1(&[1.0, 2.0]);
        let v2 = arr1(&[1.0, 2.0, 3.0]);
        let result = compare_arrays(
            v1.view().into_dyn(),
            v2.view().into_dyn(),
            Some("mismatch"),
            DIFF_TOLERANCE,
            true,
        );
        assert!(matches!(
            result,
            Err(SignalError::LengthMismatch { left: 2, right: 3 })
        ));
    }

    #[test]
    fn test_verbose_still_returns_value() {
        let v1 = arr1(&[0.0, 0.0]);
        let v2 = arr1(&[1.0, 1.0]);
        let d = compare_arrays(
            v1.view().into_dyn(),
            v2.view().into_dyn(),
            Some("loud"),
            DIFF_TOLERANCE,
            true,
        )
        .unwrap();
        assert!((d - 2.0).abs() < 1e-12);
    }
}
