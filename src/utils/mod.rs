//! Various unsorted geometrical and logical operators.

pub use self::point_in_triangle::{corner_orientation, point_in_triangle_2d, Orientation};

mod point_in_triangle;
