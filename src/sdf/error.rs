use crate::math::Real;
use crate::sdf::Axis;
use crate::shape::TriMeshBuilderError;

/// Error indicating that a grid specification cannot be used to sample a distance field.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum GridSpecError {
    /// The grid spacing is zero, negative, or not finite.
    #[error("the grid spacing must be finite and strictly positive, found {0}.")]
    InvalidSpacing(Real),
    /// At least one coordinate of the grid origin is not finite.
    #[error("the grid origin must be finite.")]
    NonFiniteOrigin,
    /// The grid has no point along an axis.
    #[error("the grid must have at least one point along the {0:?} axis.")]
    EmptyDimension(Axis),
    /// The bounding box the grid is derived from is empty or not finite.
    #[error("the bounding box of the grid must be valid and finite.")]
    InvalidBounds,
}

/// Errors that can occur while building a signed distance field.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum SdfError {
    /// The grid specification is unusable; nothing was computed.
    #[error("invalid grid specification: {0}")]
    InvalidGridSpec(#[from] GridSpecError),
    /// The working arrays for the requested grid cannot be allocated.
    #[error("unable to allocate the working arrays of a {dims:?} grid.")]
    ResourceExhaustion {
        /// The number of grid points along each axis.
        dims: [usize; 3],
    },
    /// The raw mesh buffers do not describe a valid triangle mesh.
    #[error("invalid mesh: {0}")]
    InvalidMesh(#[from] TriMeshBuilderError),
}
