//! Function to check if a point is inside a triangle and related functions.

use crate::math::{Point2, Real, Vector2};

#[derive(Eq, PartialEq, Debug, Copy, Clone)]
/// The orientation or winding direction of a corner or polygon.
pub enum Orientation {
    /// Counter-clockwise
    Ccw,
    /// Clockwise
    Cw,
    /// Neither (both vectors are equal)
    None,
}

/// Returns the orientation of the corner formed by `v1`, the origin, and `v2`, together
/// with twice its signed area.
///
/// Exactly collinear inputs are not reported as [`Orientation::None`]: the tie is broken by
/// comparing coordinates (a simulation of simplicity). Two triangles sharing an edge will
/// therefore always disagree about on which side of that edge a point exactly on it lies.
/// [`Orientation::None`] is only returned if `v1 == v2`.
pub fn corner_orientation(v1: &Vector2<Real>, v2: &Vector2<Real>) -> (Orientation, Real) {
    let twice_signed_area = v1.x * v2.y - v1.y * v2.x;

    let orientation = if twice_signed_area > 0.0 {
        Orientation::Ccw
    } else if twice_signed_area < 0.0 {
        Orientation::Cw
    } else if v2.y > v1.y {
        Orientation::Cw
    } else if v2.y < v1.y {
        Orientation::Ccw
    } else if v1.x > v2.x {
        Orientation::Cw
    } else if v1.x < v2.x {
        Orientation::Ccw
    } else {
        Orientation::None
    };

    (orientation, twice_signed_area)
}

/// Tests if `p` is inside of the 2D triangle `(a, b, c)`, with either winding.
///
/// Returns the barycentric coordinates of `p` wrt. `a`, `b`, and `c` if it is inside,
/// and `None` otherwise. Points exactly on an edge or vertex are attributed to exactly one of
/// the triangles sharing that edge or vertex (see [`corner_orientation`]).
pub fn point_in_triangle_2d(
    p: &Point2<Real>,
    a: &Point2<Real>,
    b: &Point2<Real>,
    c: &Point2<Real>,
) -> Option<[Real; 3]> {
    let pa = a - p;
    let pb = b - p;
    let pc = c - p;

    let (orient_a, wa) = corner_orientation(&pb, &pc);
    if orient_a == Orientation::None {
        return None;
    }

    let (orient_b, wb) = corner_orientation(&pc, &pa);
    if orient_b != orient_a {
        return None;
    }

    let (orient_c, wc) = corner_orientation(&pa, &pb);
    if orient_c != orient_a {
        return None;
    }

    let sum = wa + wb + wc;

    if sum == 0.0 {
        // All the sub-areas are zero: the triangle is degenerate.
        return None;
    }

    Some([wa / sum, wb / sum, wc / sum])
}
