use crate::math::{Point, Real};
use crate::sdf::{GridSpec, SdfBuilder, SdfConfig, SdfError};
use crate::shape::TriMesh;

/// A signed distance field sampled on a regular grid.
///
/// Values are negative inside of the mesh, positive outside of it, and stored with the
/// `i` index varying fastest, then `j`, then `k` (see [`GridSpec::linear_index`]).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct DistanceField {
    grid: GridSpec,
    values: Vec<Real>,
}

impl DistanceField {
    pub(crate) fn new(grid: GridSpec, values: Vec<Real>) -> Self {
        debug_assert_eq!(values.len(), grid.num_points());
        Self { grid, values }
    }

    /// Computes the signed distance field of `mesh` sampled on `grid`.
    ///
    /// The mesh is assumed to be closed and consistently oriented.
    pub fn from_trimesh(
        mesh: &TriMesh,
        grid: GridSpec,
        config: SdfConfig,
    ) -> Result<Self, SdfError> {
        SdfBuilder::new(mesh, grid, config)
            .compute_exact_distances()?
            .compute_signs()?
            .propagate()
    }

    /// Computes the signed distance field of `mesh` on a grid with spacing `dx` covering
    /// its bounding box enlarged by `padding` cells (at least one) on each side.
    pub fn from_mesh_with_padding(
        mesh: &TriMesh,
        dx: Real,
        padding: u32,
        config: SdfConfig,
    ) -> Result<Self, SdfError> {
        let grid = GridSpec::from_aabb(mesh.local_aabb(), dx, padding)?;
        Self::from_trimesh(mesh, grid, config)
    }

    /// Same as [`DistanceField::from_mesh_with_padding`], but builds the mesh from raw vertex
    /// and index buffers first.
    pub fn from_buffers(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
        dx: Real,
        padding: u32,
        config: SdfConfig,
    ) -> Result<Self, SdfError> {
        let mesh = TriMesh::new(vertices, indices)?;
        Self::from_mesh_with_padding(&mesh, dx, padding, config)
    }

    /// The grid this field is sampled on.
    #[inline]
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// All the values of this field.
    #[inline]
    pub fn values(&self) -> &[Real] {
        &self.values
    }

    /// Consumes `self` and returns its values.
    #[inline]
    pub fn into_values(self) -> Vec<Real> {
        self.values
    }

    /// The value at the grid point `(i, j, k)`, or `None` if it is out of the grid.
    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<Real> {
        let [ni, nj, nk] = self.grid.dims();
        (i < ni && j < nj && k < nk).then(|| self.values[self.grid.linear_index(i, j, k)])
    }

    /// The value at the grid point `(i, j, k)`.
    ///
    /// # Panics
    ///
    /// Panics if `(i, j, k)` is out of the grid.
    #[inline]
    pub fn value_at(&self, i: usize, j: usize, k: usize) -> Real {
        let [ni, nj, nk] = self.grid.dims();
        assert!(
            i < ni && j < nj && k < nk,
            "grid point ({}, {}, {}) out of bounds",
            i,
            j,
            k
        );
        self.values[self.grid.linear_index(i, j, k)]
    }

    /// Is the grid point `(i, j, k)` inside of the mesh?
    ///
    /// Points on the surface may be classified either way.
    #[inline]
    pub fn is_inside(&self, i: usize, j: usize, k: usize) -> bool {
        self.value_at(i, j, k).is_sign_negative()
    }

    /// The number of grid points inside of the mesh.
    pub fn num_inside(&self) -> usize {
        self.values.iter().filter(|v| v.is_sign_negative()).count()
    }

    /// The smallest value of this field.
    pub fn min_value(&self) -> Real {
        self.values.iter().copied().fold(Real::MAX, Real::min)
    }

    /// The largest value of this field.
    pub fn max_value(&self) -> Real {
        self.values.iter().copied().fold(-Real::MAX, Real::max)
    }

    /// Trilinear interpolation of this field at `pt`.
    ///
    /// Returns `None` if `pt` lies outside of the box spanned by the grid points.
    pub fn interpolate(&self, pt: &Point<Real>) -> Option<Real> {
        let coords = self.grid.grid_coords(pt);
        let dims = self.grid.dims();
        let mut base = [0; 3];
        let mut frac = [0.0; 3];

        for a in 0..3 {
            let last = (dims[a] - 1) as Real;

            if !(coords[a] >= 0.0 && coords[a] <= last) {
                return None;
            }

            let cell = coords[a].floor().min((dims[a].max(2) - 2) as Real);
            base[a] = cell as usize;
            frac[a] = coords[a] - cell;
        }

        let mut result = 0.0;

        for corner in 0..8 {
            let mut weight = 1.0;
            let mut ijk = base;

            for a in 0..3 {
                if corner & (1 << a) != 0 {
                    weight *= frac[a];
                    ijk[a] = (ijk[a] + 1).min(dims[a] - 1);
                } else {
                    weight *= 1.0 - frac[a];
                }
            }

            if weight != 0.0 {
                result += weight * self.values[self.grid.linear_index(ijk[0], ijk[1], ijk[2])];
            }
        }

        Some(result)
    }
}
