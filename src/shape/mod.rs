//! Shapes supported by the distance field builder.

pub use self::segment::{Segment, SegmentPointLocation};
pub use self::triangle::{Triangle, TrianglePointLocation};
pub use self::trimesh::{TriMesh, TriMeshBuilderError};

mod segment;
mod triangle;
mod trimesh;
