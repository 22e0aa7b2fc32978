//! Benchmarks for the coordinate transforms: forward, inverse, and the
//! full round trip at typical loudspeaker-layout sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array1;
use sphera_geo::{cartesian_to_spherical, haversine, spherical_to_cartesian};

/// Generate a deterministic cloud of points on and around the unit sphere.
fn test_points(count: usize) -> (Array1<f64>, Array1<f64>, Array1<f64>) {
    let x = Array1::from_iter((0..count).map(|i| ((i * 7 + 1) as f64 * 0.37).sin()));
    let y = Array1::from_iter((0..count).map(|i| ((i * 3 + 2) as f64 * 0.53).cos()));
    let z = Array1::from_iter((0..count).map(|i| ((i * 5 + 3) as f64 * 0.71).sin()));
    (x, y, z)
}

fn bench_cartesian_to_spherical(c: &mut Criterion) {
    let mut group = c.benchmark_group("cartesian_to_spherical");
    for count in [4usize, 64, 360, 2048] {
        let (x, y, z) = test_points(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                cartesian_to_spherical(
                    black_box(x.view().into_dyn()),
                    black_box(y.view().into_dyn()),
                    black_box(z.view().into_dyn()),
                    false,
                )
                .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    let (x, y, z) = test_points(360);
    c.bench_function("spherical_round_trip_360", |b| {
        b.iter(|| {
            let (azimuth, colatitude, r) = cartesian_to_spherical(
                black_box(x.view().into_dyn()),
                black_box(y.view().into_dyn()),
                black_box(z.view().into_dyn()),
                false,
            )
            .unwrap();
            spherical_to_cartesian(
                azimuth.view().into_dyn(),
                colatitude.view().into_dyn(),
                r.view().into_dyn(),
            )
            .unwrap()
        })
    });
}

fn bench_haversine(c: &mut Criterion) {
    let (x, y, z) = test_points(360);
    let (azimuth, colatitude, _) =
        cartesian_to_spherical(x.view().into_dyn(), y.view().into_dyn(), z.view().into_dyn(), true)
            .unwrap();
    let (azimuth2, colatitude2) = (azimuth.mapv(|a| a + 0.1), colatitude.mapv(|c| c * 0.9));
    c.bench_function("haversine_360", |b| {
        b.iter(|| {
            haversine(
                black_box(azimuth.view().into_dyn()),
                black_box(colatitude.view().into_dyn()),
                black_box(azimuth2.view().into_dyn()),
                black_box(colatitude2.view().into_dyn()),
                1.0,
            )
            .unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_cartesian_to_spherical,
    bench_round_trip,
    bench_haversine
);
criterion_main!(benches);
