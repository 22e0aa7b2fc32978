//! Fuzz target for the stack heuristic.
//!
//! Derives two small matrix shapes from the fuzz input, fills them with
//! sample data, and checks that stacking either returns a result whose
//! element count is the sum of the inputs or a structured error — never
//! a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ndarray::Array2;
use sphera_signal::stack;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }

    // Derive shapes in 1..=8 per dimension from the fuzz input.
    let rows1 = (data[0] % 8) as usize + 1;
    let cols1 = (data[1] % 8) as usize + 1;
    let rows2 = (data[2] % 8) as usize + 1;
    let cols2 = (data[3] % 8) as usize + 1;

    let fill = |rows: usize, cols: usize, seed: usize| {
        Array2::from_shape_fn((rows, cols), |(i, j)| {
            data[(seed + i * cols + j) % data.len()] as f64 / 255.0
        })
    };
    let v1 = fill(rows1, cols1, 4);
    let v2 = fill(rows2, cols2, 5);

    if let Ok(out) = stack(v1.view().into_dyn(), v2.view().into_dyn()) {
        assert_eq!(out.len(), v1.len() + v2.len());
        // Squeezing never leaves a singleton axis behind.
        if out.ndim() > 1 {
            assert!(out.shape().iter().all(|&d| d != 1));
        }
    }
});
