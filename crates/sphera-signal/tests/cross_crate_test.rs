//! Cross-crate integration tests: sphera-geo + sphera-signal.
//!
//! Exercises the pipeline a spatial renderer runs: place virtual sources
//! on the sphere, convert to unit vectors, lay out channel buffers, and
//! track levels in dB.

use ndarray::{arr1, arr2, Array1, Array2, Axis};
use sphera_geo::{
    angle_between, cartesian_to_spherical, deg2rad, haversine, spherical_to_cartesian_unit,
    vectors_to_directions,
};
use sphera_signal::{compare_arrays, interleave_channels, rms_axis, stack, to_db, DIFF_TOLERANCE};

/// Helper: generate a sine wave as f64 samples.
fn generate_sine(freq: f64, sample_rate: u32, count: usize) -> Array1<f64> {
    Array1::from_iter(
        (0..count).map(|i| (std::f64::consts::TAU * freq * i as f64 / sample_rate as f64).sin()),
    )
}

#[test]
fn test_source_positions_round_trip_through_directions() {
    // Four sources on the horizon at 0, 90, 180, 270 degrees.
    let azimuth = Array1::from_iter([0.0, 90.0, 180.0, 270.0].map(deg2rad));
    let colatitude = arr1(&[deg2rad(90.0)]);

    let (x, y, z) =
        spherical_to_cartesian_unit(azimuth.view().into_dyn(), colatitude.view().into_dyn())
            .unwrap();

    // Pack the unit vectors into an N x 3 matrix and convert back.
    let mut vecs = Array2::zeros((4, 3));
    vecs.column_mut(0).assign(&x);
    vecs.column_mut(1).assign(&y);
    vecs.column_mut(2).assign(&z);
    let directions = vectors_to_directions(vecs.view(), true).unwrap();

    for (i, &expected) in azimuth.iter().enumerate() {
        assert!(
            (directions[[i, 0]] - expected).abs() < 1e-9,
            "azimuth of source {}",
            i
        );
        assert!((directions[[i, 1]] - deg2rad(90.0)).abs() < 1e-9);
    }
}

#[test]
fn test_angular_spread_matches_haversine_on_unit_sphere() {
    // For unit vectors, the angle between them equals the great-circle
    // distance between their spherical coordinates.
    let a = arr1(&[1.0, 0.0, 0.0]);
    let b = arr1(&[0.0, 1.0, 0.0]);

    let angle = angle_between(a.view().into_dyn(), b.view().into_dyn(), None).unwrap();

    let (az_a, co_a, _) = cartesian_to_spherical(
        a.slice(ndarray::s![0..1]).into_dyn(),
        a.slice(ndarray::s![1..2]).into_dyn(),
        a.slice(ndarray::s![2..3]).into_dyn(),
        false,
    )
    .unwrap();
    let (az_b, co_b, _) = cartesian_to_spherical(
        b.slice(ndarray::s![0..1]).into_dyn(),
        b.slice(ndarray::s![1..2]).into_dyn(),
        b.slice(ndarray::s![2..3]).into_dyn(),
        false,
    )
    .unwrap();
    let distance = haversine(
        az_a.view().into_dyn(),
        co_a.view().into_dyn(),
        az_b.view().into_dyn(),
        co_b.view().into_dyn(),
        1.0,
    )
    .unwrap();

    assert!((angle - distance[0]).abs() < 1e-12);
}

#[test]
fn test_stereo_buffer_layout_and_levels() {
    let samples = 512;
    let left_row = generate_sine(440.0, 48000, samples);
    let right_row = generate_sine(880.0, 48000, samples);

    // Two mono rows stacked into a channel matrix, then interleaved into
    // a device-ready L/R layout.
    let left = stack(left_row.view().into_dyn(), left_row.view().into_dyn()).unwrap();
    let right = stack(right_row.view().into_dyn(), right_row.view().into_dyn()).unwrap();
    let left = left.into_dimensionality::<ndarray::Ix2>().unwrap();
    let right = right.into_dimensionality::<ndarray::Ix2>().unwrap();

    let buffer = interleave_channels(left.view(), right.view(), None).unwrap();
    assert_eq!(buffer.dim(), (4, samples));

    // Even rows carry the left signal, odd rows the right signal.
    let d0 = compare_arrays(
        buffer.row(0).into_dyn(),
        left_row.view().into_dyn(),
        Some("left row"),
        DIFF_TOLERANCE,
        false,
    )
    .unwrap();
    let d1 = compare_arrays(
        buffer.row(1).into_dyn(),
        right_row.view().into_dyn(),
        Some("right row"),
        DIFF_TOLERANCE,
        false,
    )
    .unwrap();
    assert!(d0 < DIFF_TOLERANCE);
    assert!(d1 < DIFF_TOLERANCE);

    // All four channels are full-scale sines: about -3 dB RMS each.
    let levels = rms_axis(buffer.view(), Axis(1));
    for &level in levels.iter() {
        let db = to_db(level, false);
        assert!((db + 3.01).abs() < 0.1, "level {} dB", db);
    }
}

#[test]
fn test_triangle_of_sources_has_consistent_area() {
    // Three sources spanning an octant of the unit sphere; the flat
    // triangle between them has area sqrt(3)/2.
    let p = arr2(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
    let area = sphera_geo::triangle_area(
        p.row(0).into_dyn(),
        p.row(1).into_dyn(),
        p.row(2).into_dyn(),
    )
    .unwrap();
    assert!((area - 3.0_f64.sqrt() / 2.0).abs() < 1e-12);
}
