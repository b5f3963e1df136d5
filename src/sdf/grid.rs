use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DIM};
use crate::sdf::{GridSpecError, SdfError};

/// One of the three coordinate axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Axis {
    /// The `x` axis, indexed by `i`.
    X,
    /// The `y` axis, indexed by `j`.
    Y,
    /// The `z` axis, indexed by `k`.
    Z,
}

impl Axis {
    /// The three axes, ordered by index.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The index of this axis (0 for `x`, 1 for `y`, 2 for `z`).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The two other axes, in cyclic order.
    ///
    /// For example, the axes orthogonal to `Y` are `[Z, X]`.
    #[inline]
    pub fn orthogonal_axes(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::Z, Axis::X],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }
}

/// An axis-aligned lattice of sample points.
///
/// The grid point `(i, j, k)` is located at `origin + (i, j, k) * dx`, with
/// `0 <= i < ni`, `0 <= j < nj`, and `0 <= k < nk`. Grid values are stored with
/// `i` varying fastest, then `j`, then `k`.
///
/// A `GridSpec` obtained from [`GridSpec::new`] or [`GridSpec::from_aabb`] always
/// has a finite origin, a finite positive spacing, and at least one point along each axis.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GridSpec {
    origin: Point<Real>,
    dx: Real,
    dims: [usize; 3],
}

impl GridSpec {
    /// Creates a new grid specification after checking that it can be sampled.
    pub fn new(origin: Point<Real>, dx: Real, dims: [usize; 3]) -> Result<Self, SdfError> {
        let result = Self { origin, dx, dims };
        result.validate()?;
        Ok(result)
    }

    /// Derives the grid covering `aabb` with `padding` additional cells on each side.
    ///
    /// The padding is raised to at least one cell. The grid origin is the lower corner
    /// of the padded box, and the number of points along each axis is chosen so that the
    /// last point lies on or beyond the upper corner of the padded box.
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(feature = "f32")] {
    /// use sdfgen3d::bounding_volume::Aabb;
    /// use sdfgen3d::math::Point;
    /// use sdfgen3d::sdf::GridSpec;
    ///
    /// let aabb = Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 2.0, 0.5));
    /// let grid = GridSpec::from_aabb(&aabb, 0.5, 1).unwrap();
    ///
    /// assert_eq!(grid.origin(), Point::new(-0.5, -0.5, -0.5));
    /// assert_eq!(grid.dims(), [5, 7, 4]);
    /// # }
    /// ```
    pub fn from_aabb(aabb: &Aabb, dx: Real, padding: u32) -> Result<Self, SdfError> {
        if !(dx.is_finite() && dx > 0.0) {
            return Err(GridSpecError::InvalidSpacing(dx).into());
        }

        if !aabb.is_valid() || !aabb.mins.iter().chain(aabb.maxs.iter()).all(|e| e.is_finite()) {
            return Err(GridSpecError::InvalidBounds.into());
        }

        let padding = padding.max(1) as Real * dx;
        let padded = aabb.loosened(padding);
        let extents = padded.extents();
        let mut dims = [1; DIM];

        for (dim, extent) in dims.iter_mut().zip(extents.iter()) {
            // NOTE: the cast saturates for extents too large to be represented. The
            //       resulting grid is then rejected as too large to be allocated.
            *dim = ((*extent / dx).ceil() as usize).saturating_add(1);
        }

        Self::new(padded.mins, dx, dims)
    }

    /// Checks that this grid can be sampled.
    ///
    /// This is only useful for grid specifications that were not built by [`GridSpec::new`]
    /// or [`GridSpec::from_aabb`] (for example after deserialization).
    pub fn validate(&self) -> Result<(), SdfError> {
        if !(self.dx.is_finite() && self.dx > 0.0) {
            return Err(GridSpecError::InvalidSpacing(self.dx).into());
        }

        if !self.origin.iter().all(|e| e.is_finite()) {
            return Err(GridSpecError::NonFiniteOrigin.into());
        }

        for axis in Axis::ALL {
            if self.dims[axis.index()] == 0 {
                return Err(GridSpecError::EmptyDimension(axis).into());
            }
        }

        if self.checked_num_points().is_none() {
            return Err(SdfError::ResourceExhaustion { dims: self.dims });
        }

        Ok(())
    }

    /// The position of the grid point `(0, 0, 0)`.
    #[inline]
    pub fn origin(&self) -> Point<Real> {
        self.origin
    }

    /// The distance between two adjacent grid points.
    #[inline]
    pub fn dx(&self) -> Real {
        self.dx
    }

    /// The number of grid points along each axis: `[ni, nj, nk]`.
    #[inline]
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// The total number of grid points, `ni * nj * nk`.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.dims[0] * self.dims[1] * self.dims[2]
    }

    pub(crate) fn checked_num_points(&self) -> Option<usize> {
        self.dims[0]
            .checked_mul(self.dims[1])?
            .checked_mul(self.dims[2])
    }

    /// The position of the grid point `(i, j, k)`.
    #[inline]
    pub fn point_at(&self, i: usize, j: usize, k: usize) -> Point<Real> {
        self.origin + Vector::new(i as Real, j as Real, k as Real) * self.dx
    }

    /// The position of the grid point with the largest indices.
    #[inline]
    pub fn upper_corner(&self) -> Point<Real> {
        self.point_at(self.dims[0] - 1, self.dims[1] - 1, self.dims[2] - 1)
    }

    /// The index of the grid point `(i, j, k)` in a buffer where `i` varies fastest,
    /// then `j`, then `k`.
    #[inline]
    pub fn linear_index(&self, i: usize, j: usize, k: usize) -> usize {
        i + self.dims[0] * (j + self.dims[1] * k)
    }

    /// The coordinates of `pt` expressed in grid index space.
    ///
    /// Grid points have integer coordinates in this space.
    #[inline]
    pub fn grid_coords(&self, pt: &Point<Real>) -> Vector<Real> {
        (pt - self.origin) / self.dx
    }

    /// The distance magnitude assigned to grid points with no known distance yet.
    ///
    /// It is equal to `(ni + nj + nk) * dx`, which is larger than the distance between any
    /// two points of the grid box, so it is an upper bound of any distance computed
    /// for the mesh parts lying inside of the grid.
    #[inline]
    pub fn unknown_distance(&self) -> Real {
        (self.dims[0] + self.dims[1] + self.dims[2]) as Real * self.dx
    }
}
