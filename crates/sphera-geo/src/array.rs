//! Array shape normalization — the input guard for every routine that
//! expects flat vector input.
//!
//! Callers hand in arrays of arbitrary dimensionality (`ArrayViewD`);
//! [`as_flat`] squeezes singleton axes, promotes bare scalars to length-1
//! sequences, and rejects anything genuinely multi-dimensional. Length-1
//! results additionally broadcast against longer inputs via
//! [`common_len`] / [`spread`].

use ndarray::{Array1, ArrayViewD};

use crate::error::{GeoError, Result};

/// Squeezes the input and checks that the result is one-dimensional.
///
/// Singleton axes are stripped; a bare scalar (zero remaining axes) is
/// promoted to a length-1 sequence. If more than one non-singleton axis
/// remains, the input is genuinely multi-dimensional and
/// [`GeoError::NotOneDimensional`] is returned.
///
/// Generic over the element type so real and complex input pass through
/// the same guard.
///
/// # Examples
///
/// ```
/// use ndarray::arr2;
/// use sphera_geo::as_flat;
///
/// // A 1x3 row matrix squeezes to a flat sequence.
/// let flat = as_flat(arr2(&[[1.0, 2.0, 3.0]]).view().into_dyn()).unwrap();
/// assert_eq!(flat.len(), 3);
///
/// // A 2x2 matrix does not.
/// assert!(as_flat(arr2(&[[1.0, 2.0], [3.0, 4.0]]).view().into_dyn()).is_err());
/// ```
pub fn as_flat<T: Clone>(a: ArrayViewD<'_, T>) -> Result<Array1<T>> {
    let ndim = a.shape().iter().filter(|&&d| d != 1).count();
    if ndim > 1 {
        return Err(GeoError::NotOneDimensional { ndim });
    }
    // At most one non-singleton axis: row-major iteration is the squeeze.
    Ok(a.iter().cloned().collect())
}

/// Resolves the common broadcast length of several flat inputs.
///
/// Every input must have the shared length or length 1. The first input
/// that fits neither produces [`GeoError::LengthMismatch`] naming it.
pub fn common_len(lens: &[(&'static str, usize)]) -> Result<usize> {
    let mut n = 1usize;
    for &(name, len) in lens {
        if len == n || len == 1 {
            continue;
        }
        if n == 1 {
            n = len;
            continue;
        }
        return Err(GeoError::LengthMismatch {
            name,
            expected: n,
            got: len,
        });
    }
    Ok(n)
}

/// Spreads a length-1 sequence to the common length; longer sequences are
/// returned as-is. Callers must have resolved `n` via [`common_len`].
pub fn spread(a: &Array1<f64>, n: usize) -> Array1<f64> {
    if a.len() == n {
        a.clone()
    } else {
        Array1::from_elem(n, a[0])
    }
}
