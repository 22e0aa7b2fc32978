//! Error types for the geometry crate.

use thiserror::Error;

/// Errors that can occur during coordinate and angular computations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeoError {
    /// Input could not be reduced to a single dimension.
    #[error("array must be one-dimensional ({ndim} dimensions remain after squeezing)")]
    NotOneDimensional {
        /// Number of non-singleton dimensions left after squeezing.
        ndim: usize,
    },

    /// Two inputs that must share a length (or broadcast from length 1) do not.
    #[error("input '{name}' has length {got}, expected {expected} or 1")]
    LengthMismatch {
        /// Name of the offending input parameter.
        name: &'static str,
        /// The length required by the other inputs.
        expected: usize,
        /// The length actually provided.
        got: usize,
    },

    /// A matrix does not have the required number of columns.
    #[error("expected {expected} columns, got {got}")]
    ColumnCountMismatch {
        /// The required column count.
        expected: usize,
        /// The column count actually provided.
        got: usize,
    },
}

/// Convenience Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeoError>;
