//! Signed distance field generation from closed triangle meshes.
//!
//! The distance field is computed by a strict three-phase pipeline, each phase consuming the
//! complete output of the previous one:
//!
//! 1. **Exact distances**: every triangle writes its exact distance to the grid points of a
//!    narrow band around it (see [`SdfConfig::exact_band`]).
//! 2. **Signs**: grid points are classified as inside or outside of the mesh by counting, along
//!    grid columns parallel to [`SdfConfig::parity_axis`], the crossings with the mesh.
//! 3. **Propagation**: the distances are propagated to the whole grid with a fixed number of
//!    fast-sweeping passes (see [`SdfConfig::sweep_passes`]), preserving the signs of phase 2.
//!
//! The phases are exposed as the typestate [`SdfBuilder`] → [`ExactDistanceComplete`] →
//! [`SignComplete`] → [`DistanceField`]. Use [`DistanceField::from_trimesh`] to run them all.

pub use self::builder::{ExactDistanceComplete, SdfBuilder, SignComplete};
pub use self::config::{SdfConfig, SweepRelaxation};
pub use self::distance_field::DistanceField;
pub use self::error::{GridSpecError, SdfError};
pub use self::grid::{Axis, GridSpec};
pub use self::sweep::{SweepDirection, SweepReport, SWEEP_DIRECTIONS};

mod array3;
mod builder;
mod config;
mod distance_field;
mod error;
mod exact_distance;
mod grid;
mod parity;
mod sweep;
