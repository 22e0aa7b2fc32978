//! Error types for the signal crate.

use thiserror::Error;

/// Errors that can occur during signal-level and channel-layout operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// Left and right channel matrices disagree in shape.
    #[error("left and right channels must have the same dimensions: left is {left_rows}x{left_cols}, right is {right_rows}x{right_cols}")]
    ChannelShapeMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// A named channel-layout convention is violated.
    #[error("'{style}' layout requires {expected} channels, got {got}")]
    FormatConstraint {
        /// Name of the layout convention (e.g. "SSR").
        style: &'static str,
        /// The channel count the convention demands.
        expected: usize,
        /// The channel count actually provided.
        got: usize,
    },

    /// Two arrays have no shared dimension to stack along.
    #[error("arrays have no common dimension: {rows1}x{cols1} vs {rows2}x{cols2}")]
    NoCommonDimension {
        rows1: usize,
        cols1: usize,
        rows2: usize,
        cols2: usize,
    },

    /// Input has more than two non-singleton dimensions.
    #[error("array must be at most two-dimensional ({ndim} dimensions remain after squeezing)")]
    TooManyDimensions {
        /// Number of non-singleton dimensions left after squeezing.
        ndim: usize,
    },

    /// Two arrays that must hold the same number of elements do not.
    #[error("element count mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

/// Convenience Result type for signal operations.
pub type Result<T> = std::result::Result<T, SignalError>;
