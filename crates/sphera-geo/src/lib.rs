//! # sphera-geo — Coordinate transforms and angular metrics for spatial audio
//!
//! Stateless numeric routines used by spatial-audio renderers to place
//! virtual sound sources: Cartesian/spherical conversion, angular
//! distances on the sphere, and the array-shape guard shared by every
//! vectorized entry point.
//!
//! ## Architecture
//!
//! - **[`array`]**: Shape normalization — squeezes arbitrary input into
//!   strict 1-D sequences and resolves length-1 broadcasting.
//! - **[`angle`]**: Degree/radian conversion with canonical range
//!   reduction.
//! - **[`coords`]**: Cartesian↔spherical transforms in both angle
//!   conventions (colatitude and legacy elevation), plus batch
//!   vector→direction conversion.
//! - **[`metrics`]**: Angles between direction vectors, haversine
//!   great-circle distance, and triangle area.
//! - **[`error`]**: Error types for all geometry operations.
//!
//! ## Quick Start
//!
//! ```rust
//! use ndarray::arr1;
//! use sphera_geo::{cartesian_to_spherical, spherical_to_cartesian};
//!
//! let x = arr1(&[1.0, 0.0]);
//! let y = arr1(&[0.0, 1.0]);
//! let z = arr1(&[0.0, 0.0]);
//!
//! let (azimuth, colatitude, r) = cartesian_to_spherical(
//!     x.view().into_dyn(),
//!     y.view().into_dyn(),
//!     z.view().into_dyn(),
//!     false,
//! )?;
//!
//! // Both points sit on the horizon of the unit sphere.
//! assert!((r[0] - 1.0).abs() < 1e-12);
//! assert!((colatitude[1] - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//!
//! let (x2, _, _) = spherical_to_cartesian(
//!     azimuth.view().into_dyn(),
//!     colatitude.view().into_dyn(),
//!     r.view().into_dyn(),
//! )?;
//! assert!((x2[0] - 1.0).abs() < 1e-12);
//! # Ok::<(), sphera_geo::GeoError>(())
//! ```

pub mod angle;
pub mod array;
pub mod coords;
pub mod error;
pub mod metrics;

pub use angle::{deg2rad, deg2rad_array, rad2deg, rad2deg_array};
pub use array::as_flat;
pub use coords::{
    cartesian_to_spherical, spherical_to_cartesian, spherical_to_cartesian_elevation,
    spherical_to_cartesian_unit, vectors_to_directions,
};
pub use error::{GeoError, Result};
pub use metrics::{angle_between, angle_between_many, haversine, triangle_area};
