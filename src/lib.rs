/*!
sdfgen
======

**sdfgen** converts closed, consistently oriented triangle meshes into dense
grid-based signed distance fields, written with the rust programming language.

The distance field is negative inside of the volume enclosed by the mesh,
positive outside of it, and is computed in three phases:

1. exact point-triangle distances inside of a narrow band around each triangle,
2. inside/outside classification by counting mesh crossings along grid columns,
3. fast-sweeping propagation of the distances to the rest of the grid.

```rust
# #[cfg(feature = "f32")] {
use sdfgen3d::math::Point;
use sdfgen3d::sdf::{DistanceField, SdfConfig};
use sdfgen3d::shape::TriMesh;

// A tetrahedron with outward-facing triangles.
let vertices = vec![
    Point::new(0.0, 0.0, 0.0),
    Point::new(1.0, 0.0, 0.0),
    Point::new(0.0, 1.0, 0.0),
    Point::new(0.0, 0.0, 1.0),
];
let indices = vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]];
let mesh = TriMesh::new(vertices, indices).unwrap();

let field = DistanceField::from_mesh_with_padding(&mesh, 0.1, 2, SdfConfig::default()).unwrap();
assert!(field.num_inside() > 0);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod query;
pub mod sdf;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub type Real = f64;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub type Real = f32;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The 2D point type, used for projections along a grid axis.
    pub use na::Point2;

    /// The 2D vector type.
    pub use na::Vector2;
}
