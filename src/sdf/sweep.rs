//! Fast-sweeping propagation of the distances to the whole grid.

use crate::math::Real;
use crate::query::PointQuery;
use crate::sdf::array3::Array3;
use crate::sdf::exact_distance::ClosestTriangle;
use crate::sdf::parity::InsideFlags;
use crate::sdf::{GridSpec, SdfError, SweepRelaxation};
use crate::shape::TriMesh;

/// A traversal order of the grid: ascending (`+1`) or descending (`-1`) along each axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SweepDirection {
    steps: [isize; 3],
}

impl SweepDirection {
    /// Creates a new sweep direction from its index increment along each axis.
    ///
    /// # Panics
    ///
    /// Panics if a step is neither `1` nor `-1`.
    pub const fn new(si: isize, sj: isize, sk: isize) -> Self {
        assert!(
            (si == 1 || si == -1) && (sj == 1 || sj == -1) && (sk == 1 || sk == -1),
            "sweep steps must be 1 or -1"
        );
        Self { steps: [si, sj, sk] }
    }

    /// The index increment along each axis, `1` or `-1`.
    #[inline]
    pub fn steps(&self) -> [isize; 3] {
        self.steps
    }

    /// The `t`-th index visited along `axis` by this sweep, among `n` indices.
    #[inline]
    fn nth_index(&self, axis: usize, t: usize, n: usize) -> usize {
        if self.steps[axis] > 0 {
            t
        } else {
            n - 1 - t
        }
    }

    /// The index of the neighbor of `index` already visited along `axis`, if any.
    #[inline]
    fn visited_neighbor(&self, axis: usize, index: usize, n: usize) -> Option<usize> {
        let prev = index as isize - self.steps[axis];
        (prev >= 0 && (prev as usize) < n).then_some(prev as usize)
    }
}

/// The eight sweep directions, in the order they are processed during each pass.
pub const SWEEP_DIRECTIONS: [SweepDirection; 8] = [
    SweepDirection::new(1, 1, 1),
    SweepDirection::new(-1, -1, -1),
    SweepDirection::new(1, 1, -1),
    SweepDirection::new(-1, -1, 1),
    SweepDirection::new(1, -1, 1),
    SweepDirection::new(-1, 1, -1),
    SweepDirection::new(1, -1, -1),
    SweepDirection::new(-1, 1, 1),
];

/// Convergence information about the sweeping passes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SweepReport {
    /// For each full pass over the eight sweep directions, the largest change of a distance
    /// magnitude during that pass.
    pub pass_max_changes: Vec<Real>,
}

impl SweepReport {
    /// The number of sweeping passes performed.
    pub fn num_passes(&self) -> usize {
        self.pass_max_changes.len()
    }

    /// The largest magnitude change during the last pass, if any pass was performed.
    pub fn last_change(&self) -> Option<Real> {
        self.pass_max_changes.last().copied()
    }
}

/// Relaxes the grid point `ijk` from its neighbors already visited by `dir`.
fn relax_point(
    closest: &mut Array3<ClosestTriangle>,
    mesh: &TriMesh,
    grid: &GridSpec,
    relaxation: SweepRelaxation,
    dir: &SweepDirection,
    [i, j, k]: [usize; 3],
) {
    let dims = grid.dims();
    let prev = [
        dir.visited_neighbor(0, i, dims[0]),
        dir.visited_neighbor(1, j, dims[1]),
        dir.visited_neighbor(2, k, dims[2]),
    ];

    match relaxation {
        SweepRelaxation::ClosestTriangle => {
            let pt = grid.point_at(i, j, k);

            // The seven neighbors obtained by stepping back along a non-empty subset of axes.
            for mask in 1..8 {
                let pick = |axis: usize, curr: usize| {
                    if mask & (1 << axis) != 0 {
                        prev[axis]
                    } else {
                        Some(curr)
                    }
                };
                let (Some(qi), Some(qj), Some(qk)) = (pick(0, i), pick(1, j), pick(2, k)) else {
                    continue;
                };

                let neighbor = closest[(qi, qj, qk)];
                let current = &mut closest[(i, j, k)];

                if let Some(tid) = neighbor.triangle {
                    if current.triangle != Some(tid) {
                        let dist = mesh.triangle(tid).distance_to_local_point(&pt);
                        let _ = current.update(dist, tid);
                    }
                }
            }
        }
        SweepRelaxation::UnitStep => {
            for axis in 0..3 {
                let Some(p) = prev[axis] else {
                    continue;
                };
                let mut nbh = [i, j, k];
                nbh[axis] = p;

                let candidate = closest[(nbh[0], nbh[1], nbh[2])].distance + grid.dx();
                let current = &mut closest[(i, j, k)];

                if candidate < current.distance {
                    current.distance = candidate;
                }
            }
        }
    }
}

fn sweep(
    closest: &mut Array3<ClosestTriangle>,
    mesh: &TriMesh,
    grid: &GridSpec,
    relaxation: SweepRelaxation,
    dir: &SweepDirection,
) {
    let [ni, nj, nk] = grid.dims();

    for tk in 0..nk {
        let k = dir.nth_index(2, tk, nk);
        for tj in 0..nj {
            let j = dir.nth_index(1, tj, nj);
            for ti in 0..ni {
                let i = dir.nth_index(0, ti, ni);
                relax_point(closest, mesh, grid, relaxation, dir, [i, j, k]);
            }
        }
    }
}

/// Propagates the distances to the whole grid, and signs them with the inside flags.
///
/// Returns the signed distance values in `i`-fastest order, and the convergence report of the
/// `num_passes` sweeping passes.
pub(crate) fn propagate_distances(
    mut closest: Array3<ClosestTriangle>,
    inside: &InsideFlags,
    mesh: &TriMesh,
    grid: &GridSpec,
    num_passes: u32,
    relaxation: SweepRelaxation,
) -> Result<(Vec<Real>, SweepReport), SdfError> {
    let dims = grid.dims();
    let mut report = SweepReport::default();
    let mut snapshot: Vec<Real> = Vec::new();

    if num_passes > 0 {
        snapshot
            .try_reserve_exact(grid.num_points())
            .map_err(|_| SdfError::ResourceExhaustion { dims })?;
    }

    for pass in 0..num_passes {
        snapshot.clear();
        snapshot.extend(closest.as_slice().iter().map(|c| c.distance));

        for dir in &SWEEP_DIRECTIONS {
            sweep(&mut closest, mesh, grid, relaxation, dir);
        }

        let max_change = snapshot
            .iter()
            .zip(closest.as_slice().iter())
            .map(|(old, new)| (old - new.distance).abs())
            .fold(0.0, Real::max);

        log::debug!("sweep pass {}: max magnitude change {}.", pass, max_change);
        report.pass_max_changes.push(max_change);
    }

    if let Some(last_change) = report.last_change() {
        if last_change > grid.dx() * 1.0e-3 {
            log::warn!(
                "the distance field did not converge after {} sweeping passes (last change: {}).",
                num_passes,
                last_change
            );
        }
    }

    drop(snapshot);

    let mut values = Vec::new();
    values
        .try_reserve_exact(grid.num_points())
        .map_err(|_| SdfError::ResourceExhaustion { dims })?;

    for k in 0..dims[2] {
        for j in 0..dims[1] {
            for i in 0..dims[0] {
                let dist = closest[(i, j, k)].distance;
                values.push(if inside.is_inside(i, j, k) { -dist } else { dist });
            }
        }
    }

    Ok((values, report))
}
