//! Exact point-triangle distances in a narrow band around each triangle.

use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::query::PointQuery;
use crate::sdf::array3::Array3;
use crate::sdf::{GridSpec, SdfError};
use crate::shape::{TriMesh, Triangle};
use core::ops::RangeInclusive;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The working state of a grid point: its best known unsigned distance, and the triangle
/// it was computed from.
///
/// A grid point with `triangle == None` has no known distance yet, and its `distance` is
/// [`GridSpec::unknown_distance`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct ClosestTriangle {
    pub distance: Real,
    pub triangle: Option<u32>,
}

impl ClosestTriangle {
    pub fn unknown(grid: &GridSpec) -> Self {
        Self {
            distance: grid.unknown_distance(),
            triangle: None,
        }
    }

    /// Replaces the current value if `distance` is strictly smaller.
    ///
    /// Returns `true` if the value changed.
    #[inline]
    pub fn update(&mut self, distance: Real, triangle: u32) -> bool {
        if distance < self.distance {
            self.distance = distance;
            self.triangle = Some(triangle);
            true
        } else {
            false
        }
    }
}

/// The grid index range covered by `[min, max]` (in grid coordinates) enlarged by `band`
/// cells below and `band + 1` cells above, clamped to `[0, n - 1]`.
#[inline]
pub(crate) fn banded_index_range(
    min: Real,
    max: Real,
    band: u32,
    n: usize,
) -> RangeInclusive<usize> {
    let last = (n - 1) as Real;
    let band = band as Real;
    // NOTE: float to int casts saturate (and map NaN to 0) so this never panics.
    let lo = (min.floor() - band).max(0.0).min(last) as usize;
    let hi = (max.floor() + band + 1.0).max(0.0).min(last) as usize;
    lo..=hi
}

/// The index-space box of grid points receiving the exact distance to `tri`.
fn triangle_band(
    grid: &GridSpec,
    tri: &Triangle,
    band: u32,
) -> [RangeInclusive<usize>; 3] {
    let a = grid.grid_coords(&tri.a);
    let b = grid.grid_coords(&tri.b);
    let c = grid.grid_coords(&tri.c);
    let mins = a.inf(&b).inf(&c);
    let maxs = a.sup(&b).sup(&c);
    let dims = grid.dims();

    [
        banded_index_range(mins.x, maxs.x, band, dims[0]),
        banded_index_range(mins.y, maxs.y, band, dims[1]),
        banded_index_range(mins.z, maxs.z, band, dims[2]),
    ]
}

/// Writes the exact distance to the triangles of `bucket` at every grid point of the
/// `k`-th slab lying in their band.
///
/// Returns the number of distance evaluations performed.
fn process_slab(
    grid: &GridSpec,
    mesh: &TriMesh,
    band: u32,
    k: usize,
    bucket: &[u32],
    slab: &mut [ClosestTriangle],
) -> usize {
    let ni = grid.dims()[0];
    let mut num_evaluations = 0;

    for &tid in bucket {
        let tri = mesh.triangle(tid);
        let [irange, jrange, _] = triangle_band(grid, &tri, band);

        for j in jrange {
            for i in irange.clone() {
                let pt: Point<Real> = grid.point_at(i, j, k);
                let dist = tri.distance_to_local_point(&pt);
                let _ = slab[i + ni * j].update(dist, tid);
                num_evaluations += 1;
            }
        }
    }

    num_evaluations
}

/// Computes the exact distance to the mesh at the grid points near its triangles.
///
/// Every grid point inside the band of at least one triangle gets the distance to the
/// closest of these triangles. Ties are resolved in favor of the triangle with the smallest
/// index, with or without the `parallel` feature. Other points keep an unknown distance.
pub(crate) fn compute_exact_distances(
    mesh: &TriMesh,
    grid: &GridSpec,
    band: u32,
) -> Result<Array3<ClosestTriangle>, SdfError> {
    let dims = grid.dims();
    let mut closest = Array3::try_new(dims, ClosestTriangle::unknown(grid))?;

    // Triangles touching each k-slab, in ascending order.
    let mut buckets: Vec<Vec<u32>> = Vec::new();
    buckets
        .try_reserve_exact(dims[2])
        .map_err(|_| SdfError::ResourceExhaustion { dims })?;
    buckets.resize_with(dims[2], Vec::new);

    let mut num_degenerate = 0;

    for (tid, tri) in mesh.triangles().enumerate() {
        if tri.is_degenerate(DEFAULT_EPSILON) {
            num_degenerate += 1;
        }

        let [_, _, krange] = triangle_band(grid, &tri, band);
        for k in krange {
            buckets[k].push(tid as u32);
        }
    }

    let slab_len = dims[0] * dims[1];

    #[cfg(not(feature = "parallel"))]
    let num_evaluations: usize = closest
        .as_mut_slice()
        .chunks_mut(slab_len)
        .zip(buckets.iter())
        .enumerate()
        .map(|(k, (slab, bucket))| process_slab(grid, mesh, band, k, bucket, slab))
        .sum();

    #[cfg(feature = "parallel")]
    let num_evaluations: usize = closest
        .as_mut_slice()
        .par_chunks_mut(slab_len)
        .zip(buckets.par_iter())
        .enumerate()
        .map(|(k, (slab, bucket))| process_slab(grid, mesh, band, k, bucket, slab))
        .sum();

    let num_band_points = closest
        .as_slice()
        .iter()
        .filter(|c| c.triangle.is_some())
        .count();

    log::debug!(
        "exact distances: {} point-triangle evaluations for {} triangles ({} degenerate), {} of {} grid points in the band.",
        num_evaluations,
        mesh.num_triangles(),
        num_degenerate,
        num_band_points,
        grid.num_points()
    );

    Ok(closest)
}
