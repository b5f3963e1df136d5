use crate::sdf::array3::Array3;
use crate::sdf::exact_distance::{self, ClosestTriangle};
use crate::sdf::parity::{self, InsideFlags};
use crate::sdf::sweep::{self, SweepReport};
use crate::sdf::{DistanceField, GridSpec, SdfConfig, SdfError};
use crate::shape::TriMesh;

/// The initial state of the signed distance field computation.
///
/// Each phase consumes the state produced by the previous one, so the phases always run
/// in order, exactly once:
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use sdfgen3d::math::Point;
/// use sdfgen3d::sdf::{GridSpec, SdfBuilder, SdfConfig};
/// use sdfgen3d::shape::TriMesh;
///
/// let mesh = TriMesh::new(
///     vec![
///         Point::new(0.0, 0.0, 0.0),
///         Point::new(1.0, 0.0, 0.0),
///         Point::new(0.0, 1.0, 0.0),
///         Point::new(0.0, 0.0, 1.0),
///     ],
///     vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
/// )
/// .unwrap();
/// let grid = GridSpec::from_aabb(mesh.local_aabb(), 0.1, 1).unwrap();
///
/// let (field, report) = SdfBuilder::new(&mesh, grid, SdfConfig::default())
///     .compute_exact_distances()
///     .unwrap()
///     .compute_signs()
///     .unwrap()
///     .propagate_with_report()
///     .unwrap();
///
/// assert_eq!(report.num_passes(), 2);
/// assert_eq!(field.values().len(), grid.num_points());
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct SdfBuilder<'a> {
    mesh: &'a TriMesh,
    grid: GridSpec,
    config: SdfConfig,
}

/// The state reached once exact distances are known in the narrow band around the mesh.
#[derive(Clone, Debug)]
pub struct ExactDistanceComplete<'a> {
    mesh: &'a TriMesh,
    grid: GridSpec,
    config: SdfConfig,
    closest: Array3<ClosestTriangle>,
}

/// The state reached once every grid point is classified as inside or outside of the mesh.
#[derive(Clone, Debug)]
pub struct SignComplete<'a> {
    mesh: &'a TriMesh,
    grid: GridSpec,
    config: SdfConfig,
    closest: Array3<ClosestTriangle>,
    inside: InsideFlags,
}

impl<'a> SdfBuilder<'a> {
    /// Prepares the computation of the signed distance field of `mesh` sampled on `grid`.
    pub fn new(mesh: &'a TriMesh, grid: GridSpec, config: SdfConfig) -> Self {
        Self { mesh, grid, config }
    }

    /// Computes the exact distance from the mesh to every grid point in the narrow band of its
    /// triangles.
    ///
    /// Fails if the grid specification is invalid, or if the working arrays cannot be allocated.
    pub fn compute_exact_distances(self) -> Result<ExactDistanceComplete<'a>, SdfError> {
        self.grid.validate()?;
        let closest =
            exact_distance::compute_exact_distances(self.mesh, &self.grid, self.config.exact_band)?;

        Ok(ExactDistanceComplete {
            mesh: self.mesh,
            grid: self.grid,
            config: self.config,
            closest,
        })
    }
}

impl<'a> ExactDistanceComplete<'a> {
    /// The grid being sampled.
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// Classifies every grid point as inside or outside of the mesh.
    pub fn compute_signs(self) -> Result<SignComplete<'a>, SdfError> {
        let inside = parity::compute_inside_flags(self.mesh, &self.grid, self.config.parity_axis)?;

        Ok(SignComplete {
            mesh: self.mesh,
            grid: self.grid,
            config: self.config,
            closest: self.closest,
            inside,
        })
    }
}

impl SignComplete<'_> {
    /// The grid being sampled.
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// The number of grid points classified as inside of the mesh.
    pub fn num_inside(&self) -> usize {
        self.inside.num_inside()
    }

    /// Propagates the distances to the whole grid and returns the final signed distance field.
    pub fn propagate(self) -> Result<DistanceField, SdfError> {
        self.propagate_with_report().map(|(field, _)| field)
    }

    /// Propagates the distances to the whole grid, and also reports the largest distance change
    /// of each sweeping pass.
    pub fn propagate_with_report(self) -> Result<(DistanceField, SweepReport), SdfError> {
        let (values, report) = sweep::propagate_distances(
            self.closest,
            &self.inside,
            self.mesh,
            &self.grid,
            self.config.sweep_passes,
            self.config.relaxation,
        )?;

        Ok((DistanceField::new(self.grid, values), report))
    }
}
