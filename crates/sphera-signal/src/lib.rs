//! # sphera-signal — Signal-level conversions and channel-layout helpers
//!
//! The signal side of the spatial-audio numeric substrate: decibel
//! conversions, RMS energy estimation, channel-matrix composition, and a
//! diagnostic comparator. Everything is a pure function over immutable
//! arrays; the only side effect anywhere is the comparator's optional
//! `tracing` report.
//!
//! ## Architecture
//!
//! - **[`level`]**: Amplitude/power ↔ decibel mapping and RMS (real and
//!   complex) along a chosen axis.
//! - **[`channels`]**: Stacking two arrays along their shared dimension
//!   and producing alternating left/right channel layouts for playback
//!   back-ends.
//! - **[`diff`]**: Cumulative element-wise difference between two arrays,
//!   for validation and debugging.
//! - **[`error`]**: Error types for all signal operations.
//!
//! ## Quick Start
//!
//! ```rust
//! use ndarray::arr2;
//! use sphera_signal::{interleave_channels, rms_axis, to_db};
//! use ndarray::Axis;
//!
//! let left = arr2(&[[0.5, 0.5, 0.5], [0.1, 0.1, 0.1]]);
//! let right = arr2(&[[0.4, 0.4, 0.4], [0.2, 0.2, 0.2]]);
//!
//! // Device-ready buffer layout: L0 R0 L1 R1.
//! let buffer = interleave_channels(left.view(), right.view(), None)?;
//! assert_eq!(buffer.dim(), (4, 3));
//!
//! // Per-channel level in dB.
//! let levels = rms_axis(buffer.view(), Axis(1));
//! assert!((to_db(levels[0], false) - -6.02).abs() < 0.01);
//! # Ok::<(), sphera_signal::SignalError>(())
//! ```

pub mod channels;
pub mod diff;
pub mod error;
pub mod level;

pub use channels::{interleave_channels, stack, InterleaveStyle, SSR_CHANNEL_COUNT};
pub use diff::{compare_arrays, DIFF_TOLERANCE};
pub use error::{Result, SignalError};
pub use level::{
    from_db, from_db_array, rms, rms_axis, rms_axis_complex, rms_complex, to_db, to_db_array,
};
