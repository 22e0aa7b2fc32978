//! Cartesian/spherical coordinate conversion.
//!
//! Two angle conventions exist side by side and must not be mixed up:
//!
//! - **Colatitude** (the primary convention): the second angle is measured
//!   down from the positive pole, in `[0, pi]`. Used by
//!   [`cartesian_to_spherical`] and [`spherical_to_cartesian`].
//! - **Elevation** (the legacy convention): the second angle is measured up
//!   from the horizontal plane, in `[-pi/2, pi/2]`. Used only by
//!   [`spherical_to_cartesian_elevation`].
//!
//! The two differ by `elevation = pi/2 - colatitude`; substituting one
//! transform for the other silently mirrors sources across the horizon,
//! so each convention gets its own explicitly named operation.

use ndarray::{Array1, Array2, ArrayView2, ArrayViewD, Axis, Zip};

use crate::array::{as_flat, common_len, spread};
use crate::error::{GeoError, Result};

/// Radius floor applied when `steady_colat` is requested, keeping the
/// colatitude division finite at the origin.
const RADIUS_EPSILON: f64 = 1e-14;

/// Converts Cartesian coordinates to spherical `(azimuth, colatitude, r)`.
///
/// Each input passes the shape guard independently and broadcasts from
/// length 1, so a scalar `z` against vector `x`/`y` is fine. The azimuth
/// comes from `atan2(y, x)` and lies in `(-pi, pi]`; the colatitude is
/// `acos(z / r)` in `[0, pi]`.
///
/// At the origin `r = 0` and the colatitude division yields NaN. With
/// `steady_colat` the radius is floor-clamped to a small epsilon first,
/// trading exactness at the origin for a finite result.
///
/// # Errors
///
/// Returns [`GeoError::NotOneDimensional`] for multi-dimensional input and
/// [`GeoError::LengthMismatch`] when the inputs cannot broadcast to a
/// common length.
pub fn cartesian_to_spherical(
    x: ArrayViewD<'_, f64>,
    y: ArrayViewD<'_, f64>,
    z: ArrayViewD<'_, f64>,
    steady_colat: bool,
) -> Result<(Array1<f64>, Array1<f64>, Array1<f64>)> {
    let x = as_flat(x)?;
    let y = as_flat(y)?;
    let z = as_flat(z)?;
    let n = common_len(&[("x", x.len()), ("y", y.len()), ("z", z.len())])?;
    let x = spread(&x, n);
    let y = spread(&y, n);
    let z = spread(&z, n);

    let r = Zip::from(&x)
        .and(&y)
        .and(&z)
        .map_collect(|&x, &y, &z| (x * x + y * y + z * z).sqrt());
    let azimuth = Zip::from(&y).and(&x).map_collect(|&y, &x| y.atan2(x));
    let colatitude = Zip::from(&z).and(&r).map_collect(|&z, &r| {
        let r = if steady_colat { r.max(RADIUS_EPSILON) } else { r };
        (z / r).acos()
    });

    Ok((azimuth, colatitude, r))
}

/// Converts spherical `(azimuth, colatitude, radius)` to Cartesian.
///
/// The inverse of [`cartesian_to_spherical`]:
/// `x = r*cos(azimuth)*sin(colatitude)`, `y = r*sin(azimuth)*sin(colatitude)`,
/// `z = r*cos(colatitude)`. All three inputs pass the shape guard and
/// broadcast from length 1 — in particular a length-1 radius spreads over
/// any number of directions.
///
/// # Errors
///
/// Returns [`GeoError::NotOneDimensional`] for multi-dimensional input and
/// [`GeoError::LengthMismatch`] when the inputs cannot broadcast to a
/// common length.
pub fn spherical_to_cartesian(
    azimuth: ArrayViewD<'_, f64>,
    colatitude: ArrayViewD<'_, f64>,
    radius: ArrayViewD<'_, f64>,
) -> Result<(Array1<f64>, Array1<f64>, Array1<f64>)> {
    let azimuth = as_flat(azimuth)?;
    let colatitude = as_flat(colatitude)?;
    let radius = as_flat(radius)?;
    let n = common_len(&[
        ("azimuth", azimuth.len()),
        ("colatitude", colatitude.len()),
        ("radius", radius.len()),
    ])?;
    let azimuth = spread(&azimuth, n);
    let colatitude = spread(&colatitude, n);
    let radius = spread(&radius, n);

    let x = Zip::from(&azimuth)
        .and(&colatitude)
        .and(&radius)
        .map_collect(|&az, &co, &r| r * az.cos() * co.sin());
    let y = Zip::from(&azimuth)
        .and(&colatitude)
        .and(&radius)
        .map_collect(|&az, &co, &r| r * az.sin() * co.sin());
    let z = Zip::from(&colatitude)
        .and(&radius)
        .map_collect(|&co, &r| r * co.cos());

    Ok((x, y, z))
}

/// [`spherical_to_cartesian`] on the unit sphere (radius 1).
pub fn spherical_to_cartesian_unit(
    azimuth: ArrayViewD<'_, f64>,
    colatitude: ArrayViewD<'_, f64>,
) -> Result<(Array1<f64>, Array1<f64>, Array1<f64>)> {
    let unit = Array1::from_elem(1, 1.0);
    spherical_to_cartesian(azimuth, colatitude, unit.view().into_dyn())
}

/// Converts spherical coordinates with **elevation** to Cartesian.
///
/// The legacy convention: the second angle is measured up from the
/// horizontal plane, so `z = r*sin(elevation)` and the horizontal
/// components come from `r*cos(elevation)`. Mathematically distinct from
/// [`spherical_to_cartesian`] (`elevation = pi/2 - colatitude`); do not
/// substitute one for the other.
///
/// # Errors
///
/// Returns [`GeoError::NotOneDimensional`] for multi-dimensional input and
/// [`GeoError::LengthMismatch`] when the inputs cannot broadcast to a
/// common length.
pub fn spherical_to_cartesian_elevation(
    azimuth: ArrayViewD<'_, f64>,
    elevation: ArrayViewD<'_, f64>,
    radius: ArrayViewD<'_, f64>,
) -> Result<(Array1<f64>, Array1<f64>, Array1<f64>)> {
    let azimuth = as_flat(azimuth)?;
    let elevation = as_flat(elevation)?;
    let radius = as_flat(radius)?;
    let n = common_len(&[
        ("azimuth", azimuth.len()),
        ("elevation", elevation.len()),
        ("radius", radius.len()),
    ])?;
    let azimuth = spread(&azimuth, n);
    let elevation = spread(&elevation, n);
    let radius = spread(&radius, n);

    let z = Zip::from(&elevation)
        .and(&radius)
        .map_collect(|&el, &r| r * el.sin());
    let x = Zip::from(&azimuth)
        .and(&elevation)
        .and(&radius)
        .map_collect(|&az, &el, &r| r * el.cos() * az.cos());
    let y = Zip::from(&azimuth)
        .and(&elevation)
        .and(&radius)
        .map_collect(|&az, &el, &r| r * el.cos() * az.sin());

    Ok((x, y, z))
}

/// Converts an N x 3 matrix of Cartesian points to N x 2 rows of
/// `[azimuth, colatitude]`.
///
/// Uses the primary (colatitude) transform. With `positive_azimuth` the
/// azimuth is wrapped from `atan2`'s `(-pi, pi]` into `[0, 2*pi)`.
///
/// # Errors
///
/// Returns [`GeoError::ColumnCountMismatch`] unless `vecs` has exactly
/// three columns.
pub fn vectors_to_directions(
    vecs: ArrayView2<'_, f64>,
    positive_azimuth: bool,
) -> Result<Array2<f64>> {
    if vecs.ncols() != 3 {
        return Err(GeoError::ColumnCountMismatch {
            expected: 3,
            got: vecs.ncols(),
        });
    }

    let (azimuth, colatitude, _r) = cartesian_to_spherical(
        vecs.index_axis(Axis(1), 0).into_dyn(),
        vecs.index_axis(Axis(1), 1).into_dyn(),
        vecs.index_axis(Axis(1), 2).into_dyn(),
        false,
    )?;
    let azimuth = if positive_azimuth {
        azimuth.mapv(|az| az.rem_euclid(std::f64::consts::TAU))
    } else {
        azimuth
    };

    let mut directions = Array2::zeros((vecs.nrows(), 2));
    directions.column_mut(0).assign(&azimuth);
    directions.column_mut(1).assign(&colatitude);
    Ok(directions)
}
