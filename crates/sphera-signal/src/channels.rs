//! Channel-matrix composition — stacking two arrays along their shared
//! dimension and interleaving left/right channel layouts.
//!
//! Channel matrices are rows-by-columns = channels-by-samples throughout.

use ndarray::{concatenate, Array1, Array2, ArrayD, ArrayView2, ArrayViewD, Axis};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SignalError};

/// Channel count demanded by the SSR surround layout.
pub const SSR_CHANNEL_COUNT: usize = 360;

/// Named channel-layout conventions understood by [`interleave_channels`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterleaveStyle {
    /// Fixed 360-channel surround layout; the input must carry exactly
    /// [`SSR_CHANNEL_COUNT`] channels.
    Ssr,
}

/// Stacks two arrays along their shared dimension.
///
/// Both inputs are promoted to at least two dimensions (a scalar becomes
/// 1x1, a flat sequence of n elements becomes a 1xn row). The shared
/// dimension must be the *smaller* dimension of each array — that is the
/// tie-break that tells a row vector from a column vector when shapes
/// alone are ambiguous:
///
/// - equal row counts, rows smaller than columns → rows are concatenated
///   (two 1x5 rows give a 2x5 result);
/// - otherwise, equal column counts, columns smaller than rows → columns
///   are concatenated (two 5x1 columns give a 5x2 result).
///
/// The row check runs first; shapes that satisfy neither (including two
/// equal square matrices, where neither dimension is smaller) are
/// rejected. Incidental singleton dimensions are squeezed from the
/// result.
///
/// # Errors
///
/// Returns [`SignalError::TooManyDimensions`] for input beyond 2-D and
/// [`SignalError::NoCommonDimension`] when the shapes do not line up.
pub fn stack(v1: ArrayViewD<'_, f64>, v2: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>> {
    let a = at_least_2d(&v1)?;
    let b = at_least_2d(&v2)?;
    let (rows1, cols1) = a.dim();
    let (rows2, cols2) = b.dim();
    let no_common = SignalError::NoCommonDimension {
        rows1,
        cols1,
        rows2,
        cols2,
    };

    let joined = if rows1 == rows2 && (rows1 < cols1 || rows2 < cols2) {
        concatenate(Axis(0), &[a.view(), b.view()])
    } else if cols1 == cols2 && (cols1 < rows1 || cols2 < rows2) {
        concatenate(Axis(1), &[a.view(), b.view()])
    } else {
        return Err(no_common);
    };

    // A chosen branch can still fail when the off-dimension disagrees
    // (equal row counts but different widths under row concatenation).
    let joined = joined.map_err(|_| no_common)?;
    Ok(squeeze(joined.into_dyn()))
}

/// Interleaves left and right channel matrices (channels x samples).
///
/// The output carries twice the channel count: even output channels
/// (0, 2, 4, ...) are the `left` rows in order, odd output channels the
/// corresponding `right` rows, giving true left/right alternation per
/// channel pair.
///
/// # Errors
///
/// Returns [`SignalError::ChannelShapeMismatch`] when the two matrices
/// disagree in shape, and [`SignalError::FormatConstraint`] when
/// [`InterleaveStyle::Ssr`] is requested with a channel count other than
/// 360.
pub fn interleave_channels(
    left: ArrayView2<'_, f64>,
    right: ArrayView2<'_, f64>,
    style: Option<InterleaveStyle>,
) -> Result<Array2<f64>> {
    if left.dim() != right.dim() {
        let (left_rows, left_cols) = left.dim();
        let (right_rows, right_cols) = right.dim();
        return Err(SignalError::ChannelShapeMismatch {
            left_rows,
            left_cols,
            right_rows,
            right_cols,
        });
    }
    if style == Some(InterleaveStyle::Ssr) && left.nrows() != SSR_CHANNEL_COUNT {
        return Err(SignalError::FormatConstraint {
            style: "SSR",
            expected: SSR_CHANNEL_COUNT,
            got: left.nrows(),
        });
    }

    let (channels, samples) = left.dim();
    let mut interleaved = Array2::zeros((2 * channels, samples));
    for (i, row) in left.outer_iter().enumerate() {
        interleaved.row_mut(2 * i).assign(&row);
    }
    for (i, row) in right.outer_iter().enumerate() {
        interleaved.row_mut(2 * i + 1).assign(&row);
    }
    Ok(interleaved)
}

/// Promotes input to exactly two dimensions without squeezing: a scalar
/// becomes 1x1, a flat sequence a single row, and 2-D input is kept
/// as-is (so a 5x1 column stays a column).
fn at_least_2d(a: &ArrayViewD<'_, f64>) -> Result<Array2<f64>> {
    match a.ndim() {
        0 | 1 => {
            let flat: Array1<f64> = a.iter().cloned().collect();
            Ok(flat.insert_axis(Axis(0)))
        }
        2 => {
            let (rows, cols) = (a.shape()[0], a.shape()[1]);
            Ok(Array2::from_shape_fn((rows, cols), |(i, j)| a[[i, j]]))
        }
        ndim => Err(SignalError::TooManyDimensions { ndim }),
    }
}

/// Removes singleton axes, keeping at least one dimension.
fn squeeze(mut a: ArrayD<f64>) -> ArrayD<f64> {
    while a.ndim() > 1 {
        match a.shape().iter().position(|&d| d == 1) {
            Some(axis) => a = a.index_axis_move(Axis(axis), 0),
            None => break,
        }
    }
    a
}
