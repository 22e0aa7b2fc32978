//! Angular metrics — angles between direction vectors, great-circle
//! distance, and triangle area.

use ndarray::{Array1, ArrayView1, ArrayView2, ArrayViewD, Zip};

use crate::array::{as_flat, common_len, spread};
use crate::error::{GeoError, Result};

/// Angle between two direction vectors, optionally relative to a vertex.
///
/// With a vertex both vectors are re-expressed relative to it (vector
/// subtraction) before the angle is computed. The cosine is clamped to
/// `[-1, 1]` before `acos` — floating-point dot/norm arithmetic can
/// overshoot the valid domain by a few ulps.
///
/// Zero-norm input divides to NaN, which propagates as a numeric result
/// rather than an error.
///
/// # Errors
///
/// Returns [`GeoError::NotOneDimensional`] for multi-dimensional input and
/// [`GeoError::LengthMismatch`] when the vectors (or the vertex) disagree
/// in length.
pub fn angle_between(
    v1: ArrayViewD<'_, f64>,
    v2: ArrayViewD<'_, f64>,
    vertex: Option<ArrayView1<'_, f64>>,
) -> Result<f64> {
    let mut v1 = as_flat(v1)?;
    let mut v2 = as_flat(v2)?;
    if v2.len() != v1.len() {
        return Err(GeoError::LengthMismatch {
            name: "v2",
            expected: v1.len(),
            got: v2.len(),
        });
    }
    if let Some(vertex) = vertex {
        if vertex.len() != v1.len() {
            return Err(GeoError::LengthMismatch {
                name: "vertex",
                expected: v1.len(),
                got: vertex.len(),
            });
        }
        v1 -= &vertex;
        v2 -= &vertex;
    }

    Ok(angle_of(v1.view(), norm(v1.view()), v2.view()))
}

/// Angle between one vector and each row of a batch.
///
/// Each row of `v2` is one direction; the result holds one angle per row.
/// The optional vertex shifts `v1` and every row of `v2` alike.
///
/// # Errors
///
/// Returns [`GeoError::NotOneDimensional`] for multi-dimensional `v1`,
/// [`GeoError::ColumnCountMismatch`] when the batch width differs from
/// `v1`'s length, and [`GeoError::LengthMismatch`] for a misfit vertex.
pub fn angle_between_many(
    v1: ArrayViewD<'_, f64>,
    v2: ArrayView2<'_, f64>,
    vertex: Option<ArrayView1<'_, f64>>,
) -> Result<Array1<f64>> {
    let mut v1 = as_flat(v1)?;
    if v2.ncols() != v1.len() {
        return Err(GeoError::ColumnCountMismatch {
            expected: v1.len(),
            got: v2.ncols(),
        });
    }
    let mut v2 = v2.to_owned();
    if let Some(vertex) = vertex {
        if vertex.len() != v1.len() {
            return Err(GeoError::LengthMismatch {
                name: "vertex",
                expected: v1.len(),
                got: vertex.len(),
            });
        }
        v1 -= &vertex;
        v2 -= &vertex;
    }

    let n1 = norm(v1.view());
    Ok(v2
        .outer_iter()
        .map(|row| angle_of(v1.view(), n1, row))
        .collect())
}

/// Great-circle distance between pairs of points on a sphere.
///
/// Works internally in latitude (`pi/2 - colatitude`) using the haversine
/// formula: `h = sin^2(dlat/2) + cos(lat1)*cos(lat2)*sin^2(dlon/2)`,
/// distance `= 2*radius*asin(sqrt(h))`. For `radius = 1` this is the
/// central angle. Distance is symmetric under swapping the two points and
/// zero for identical points.
///
/// All four angle inputs must share a length or broadcast from length 1.
///
/// # Errors
///
/// Returns [`GeoError::NotOneDimensional`] for multi-dimensional input and
/// [`GeoError::LengthMismatch`] when the inputs cannot broadcast to a
/// common length.
pub fn haversine(
    azimuth1: ArrayViewD<'_, f64>,
    colatitude1: ArrayViewD<'_, f64>,
    azimuth2: ArrayViewD<'_, f64>,
    colatitude2: ArrayViewD<'_, f64>,
    radius: f64,
) -> Result<Array1<f64>> {
    let azimuth1 = as_flat(azimuth1)?;
    let colatitude1 = as_flat(colatitude1)?;
    let azimuth2 = as_flat(azimuth2)?;
    let colatitude2 = as_flat(colatitude2)?;
    let n = common_len(&[
        ("azimuth1", azimuth1.len()),
        ("colatitude1", colatitude1.len()),
        ("azimuth2", azimuth2.len()),
        ("colatitude2", colatitude2.len()),
    ])?;
    let azimuth1 = spread(&azimuth1, n);
    let colatitude1 = spread(&colatitude1, n);
    let azimuth2 = spread(&azimuth2, n);
    let colatitude2 = spread(&colatitude2, n);

    Ok(Zip::from(&azimuth1)
        .and(&colatitude1)
        .and(&azimuth2)
        .and(&colatitude2)
        .map_collect(|&az1, &co1, &az2, &co2| {
            let lat1 = std::f64::consts::FRAC_PI_2 - co1;
            let lat2 = std::f64::consts::FRAC_PI_2 - co2;
            let dlon = az2 - az1;
            let dlat = lat2 - lat1;
            let h = (dlat / 2.0).sin().powi(2)
                + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
            2.0 * radius * h.sqrt().asin()
        }))
}

/// Area of the planar triangle spanned by three 3-D points:
/// `0.5 * |cross(p2 - p1, p3 - p1)|`.
///
/// Collinear points give zero area; that is a valid result, not an error.
///
/// # Errors
///
/// Returns [`GeoError::NotOneDimensional`] for multi-dimensional input and
/// [`GeoError::LengthMismatch`] when a point does not have exactly three
/// components.
pub fn triangle_area(
    p1: ArrayViewD<'_, f64>,
    p2: ArrayViewD<'_, f64>,
    p3: ArrayViewD<'_, f64>,
) -> Result<f64> {
    let p1 = as_point3(p1, "p1")?;
    let p2 = as_point3(p2, "p2")?;
    let p3 = as_point3(p3, "p3")?;

    let a = [p2[0] - p1[0], p2[1] - p1[1], p2[2] - p1[2]];
    let b = [p3[0] - p1[0], p3[1] - p1[1], p3[2] - p1[2]];
    let cross = [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ];
    Ok(0.5 * (cross[0] * cross[0] + cross[1] * cross[1] + cross[2] * cross[2]).sqrt())
}

fn as_point3(p: ArrayViewD<'_, f64>, name: &'static str) -> Result<Array1<f64>> {
    let p = as_flat(p)?;
    if p.len() != 3 {
        return Err(GeoError::LengthMismatch {
            name,
            expected: 3,
            got: p.len(),
        });
    }
    Ok(p)
}

fn norm(v: ArrayView1<'_, f64>) -> f64 {
    v.dot(&v).sqrt()
}

fn angle_of(v1: ArrayView1<'_, f64>, n1: f64, v2: ArrayView1<'_, f64>) -> f64 {
    let cos = v1.dot(&v2) / (n1 * norm(v2));
    cos.clamp(-1.0, 1.0).acos()
}
