//! Inside/outside classification by counting mesh crossings along grid columns.

use crate::math::{Point2, Real, Vector};
use crate::sdf::{Axis, GridSpec, SdfError};
use crate::shape::TriMesh;
use crate::utils;
use ordered_float::OrderedFloat;
use smallvec::SmallVec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The coordinates, along the parity axis and in grid index space, at which a grid column
/// crosses the mesh.
pub(crate) type ColumnCrossingList = SmallVec<[Real; 4]>;

/// The inside/outside classification of every grid point.
///
/// Flags are stored column by column: the index along the parity axis varies fastest.
#[derive(Clone, Debug)]
pub(crate) struct InsideFlags {
    axis: Axis,
    dims: [usize; 3],
    flags: Vec<bool>,
}

impl InsideFlags {
    /// Is the grid point `(i, j, k)` inside of the mesh?
    #[inline]
    pub fn is_inside(&self, i: usize, j: usize, k: usize) -> bool {
        let ijk = [i, j, k];
        let [u, v] = self.axis.orthogonal_axes();
        let ia = ijk[self.axis.index()];
        let iu = ijk[u.index()];
        let iv = ijk[v.index()];
        let na = self.dims[self.axis.index()];
        let nu = self.dims[u.index()];

        self.flags[ia + na * (iu + nu * iv)]
    }

    pub fn num_inside(&self) -> usize {
        self.flags.iter().filter(|f| **f).count()
    }
}

/// Sorts the crossings of a column and flags its grid points with an odd number of crossings
/// at or below them.
///
/// Crossings below the first grid point count for every point of the column, and crossings
/// beyond the last grid point count for none.
fn walk_column(crossings: &mut ColumnCrossingList, column: &mut [bool]) {
    crossings.sort_unstable_by_key(|x| OrderedFloat(*x));

    let mut inside = false;
    let mut next = 0;

    for (ia, flag) in column.iter_mut().enumerate() {
        while next < crossings.len() && crossings[next] <= ia as Real {
            inside = !inside;
            next += 1;
        }

        *flag = inside;
    }
}

/// The coordinate along `axis`, in grid index space, at which the grid column through the
/// projected point `column` crosses `tri`, if it does.
fn column_crossing(
    column: &Point2<Real>,
    [pa, pb, pc]: &[Vector<Real>; 3],
    axis: Axis,
) -> Option<Real> {
    let [u, v] = axis.orthogonal_axes();
    let (a, u, v) = (axis.index(), u.index(), v.index());
    let a2 = Point2::new(pa[u], pa[v]);
    let b2 = Point2::new(pb[u], pb[v]);
    let c2 = Point2::new(pc[u], pc[v]);

    utils::point_in_triangle_2d(column, &a2, &b2, &c2)
        .map(|[wa, wb, wc]| wa * pa[a] + wb * pb[a] + wc * pc[a])
}

/// Pushes to `crossings` the crossings of every grid column parallel to `axis` with the mesh.
///
/// Columns are indexed like the inside flags. Returns the total number of crossings.
fn collect_crossings(
    mesh: &TriMesh,
    grid: &GridSpec,
    axis: Axis,
    crossings: &mut [ColumnCrossingList],
) -> usize {
    let dims = grid.dims();
    let [u, v] = axis.orthogonal_axes();
    let (u, v) = (u.index(), v.index());
    let (nu, nv) = (dims[u], dims[v]);
    let mut num_crossings = 0;

    for tri in mesh.triangles() {
        let corners = [
            grid.grid_coords(&tri.a),
            grid.grid_coords(&tri.b),
            grid.grid_coords(&tri.c),
        ];
        let [pa, pb, pc] = &corners;

        // Columns whose (integer) coordinates lie in the projected bounding box.
        let umin = pa[u].min(pb[u]).min(pc[u]).ceil().max(0.0);
        let umax = pa[u].max(pb[u]).max(pc[u]).floor().min((nu - 1) as Real);
        let vmin = pa[v].min(pb[v]).min(pc[v]).ceil().max(0.0);
        let vmax = pa[v].max(pb[v]).max(pc[v]).floor().min((nv - 1) as Real);

        if !(umin <= umax && vmin <= vmax) {
            continue;
        }

        for iv in vmin as usize..=vmax as usize {
            for iu in umin as usize..=umax as usize {
                let column = Point2::new(iu as Real, iv as Real);

                if let Some(crossing) = column_crossing(&column, &corners, axis) {
                    crossings[iu + nu * iv].push(crossing);
                    num_crossings += 1;
                }
            }
        }
    }

    num_crossings
}

/// Classifies every grid point as inside or outside of the mesh.
///
/// For each grid column parallel to `axis`, the mesh triangles whose projection along `axis`
/// contain the column are intersected with it. A grid point is inside if an odd number of
/// these intersections lie at or below it along the column.
pub(crate) fn compute_inside_flags(
    mesh: &TriMesh,
    grid: &GridSpec,
    axis: Axis,
) -> Result<InsideFlags, SdfError> {
    let dims = grid.dims();
    let [u, v] = axis.orthogonal_axes();
    let (a, u, v) = (axis.index(), u.index(), v.index());
    let (na, nu, nv) = (dims[a], dims[u], dims[v]);
    let num_points = grid
        .checked_num_points()
        .ok_or(SdfError::ResourceExhaustion { dims })?;

    let mut crossings: Vec<ColumnCrossingList> = Vec::new();
    crossings
        .try_reserve_exact(nu * nv)
        .map_err(|_| SdfError::ResourceExhaustion { dims })?;
    crossings.resize_with(nu * nv, ColumnCrossingList::new);

    let mut flags = Vec::new();
    flags
        .try_reserve_exact(num_points)
        .map_err(|_| SdfError::ResourceExhaustion { dims })?;
    flags.resize(num_points, false);

    let num_crossings = collect_crossings(mesh, grid, axis, &mut crossings);

    #[cfg(not(feature = "parallel"))]
    let num_odd_columns = flags
        .chunks_mut(na)
        .zip(crossings.iter_mut())
        .map(|(column, crossings)| {
            walk_column(crossings, column);
            crossings.len() % 2
        })
        .sum::<usize>();

    #[cfg(feature = "parallel")]
    let num_odd_columns = flags
        .par_chunks_mut(na)
        .zip(crossings.par_iter_mut())
        .map(|(column, crossings)| {
            walk_column(crossings, column);
            crossings.len() % 2
        })
        .sum::<usize>();

    if num_odd_columns > 0 {
        log::warn!(
            "{} grid columns cross the mesh an odd number of times; the mesh is probably not closed.",
            num_odd_columns
        );
    }

    let result = InsideFlags {
        axis,
        dims,
        flags,
    };

    log::debug!(
        "signs: {} crossings along {:?}, {} of {} grid points inside.",
        num_crossings,
        axis,
        result.num_inside(),
        num_points
    );

    Ok(result)
}
