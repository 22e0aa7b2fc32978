//! Fuzz target for channel interleaving.
//!
//! Checks that interleaving either fails with a structured error or
//! produces the alternating layout with every input row preserved.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ndarray::Array2;
use sphera_signal::{interleave_channels, InterleaveStyle};

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }

    let channels = (data[0] % 16) as usize + 1;
    let samples = (data[1] % 16) as usize + 1;
    let mismatch = data[2] & 1 == 1;
    let style = if data[3] & 1 == 1 {
        Some(InterleaveStyle::Ssr)
    } else {
        None
    };

    let fill = |rows: usize, cols: usize, seed: usize| {
        Array2::from_shape_fn((rows, cols), |(i, j)| {
            data[(seed + i * cols + j) % data.len()] as f64 - 128.0
        })
    };
    let left = fill(channels, samples, 4);
    let right = fill(channels + usize::from(mismatch), samples, 5);

    match interleave_channels(left.view(), right.view(), style) {
        Ok(out) => {
            assert_eq!(out.dim(), (2 * channels, samples));
            for (i, row) in left.outer_iter().enumerate() {
                assert_eq!(out.row(2 * i), row);
            }
            for (i, row) in right.outer_iter().enumerate() {
                assert_eq!(out.row(2 * i + 1), row);
            }
        }
        Err(_) => {
            // Shape or layout constraint violated; nothing to check.
        }
    }
});
