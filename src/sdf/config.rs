use crate::sdf::Axis;

/// The rule used by the sweeping passes to improve the distance at a grid point from one of
/// its already-visited neighbors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum SweepRelaxation {
    /// Evaluate the exact distance from the grid point to the closest triangle known by each
    /// of its seven already-visited neighbors in the sweep direction.
    ///
    /// The resulting distance is never larger than the neighbor distance plus the distance
    /// between both grid points, and is exact whenever the closest triangle of the grid point
    /// is known by one of its neighbors.
    #[default]
    ClosestTriangle,
    /// Use the distance of each of the three face neighbors already visited in the sweep
    /// direction, plus the grid spacing.
    ///
    /// This is cheaper but only yields an upper bound of the distance far from the mesh.
    UnitStep,
}

/// Parameters of the signed distance field generation.
///
/// A configuration can always be used: any value of each field leads to a well-defined
/// (though possibly inaccurate) distance field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SdfConfig {
    /// The number of grid cells added on each side of a triangle's bounding box to select the
    /// grid points receiving the exact distance to that triangle.
    ///
    /// Defaults to 1.
    pub exact_band: u32,
    /// The axis of the grid columns along which mesh crossings are counted to classify
    /// grid points as inside or outside of the mesh.
    ///
    /// Defaults to [`Axis::X`].
    pub parity_axis: Axis,
    /// The number of times the 8 sweep directions are processed when propagating distances.
    ///
    /// Defaults to 2. With 0 passes, the grid points outside of the exact band keep an
    /// unknown distance magnitude.
    pub sweep_passes: u32,
    /// The rule used by the sweeping passes to propagate distances.
    pub relaxation: SweepRelaxation,
}

impl Default for SdfConfig {
    fn default() -> Self {
        Self {
            exact_band: 1,
            parity_axis: Axis::X,
            sweep_passes: 2,
            relaxation: SweepRelaxation::ClosestTriangle,
        }
    }
}

impl SdfConfig {
    /// Sets the width, in grid cells, of the band receiving exact distances.
    pub fn with_exact_band(mut self, exact_band: u32) -> Self {
        self.exact_band = exact_band;
        self
    }

    /// Sets the axis of the columns used for inside/outside classification.
    pub fn with_parity_axis(mut self, parity_axis: Axis) -> Self {
        self.parity_axis = parity_axis;
        self
    }

    /// Sets the number of sweeping passes.
    pub fn with_sweep_passes(mut self, sweep_passes: u32) -> Self {
        self.sweep_passes = sweep_passes;
        self
    }

    /// Sets the propagation rule of the sweeping passes.
    pub fn with_relaxation(mut self, relaxation: SweepRelaxation) -> Self {
        self.relaxation = relaxation;
        self
    }
}
