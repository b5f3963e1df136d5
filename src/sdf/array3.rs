use crate::sdf::SdfError;
use core::ops::{Index, IndexMut};

/// A dense 3D array stored with `i` varying fastest, then `j`, then `k`.
#[derive(Clone, Debug)]
pub(crate) struct Array3<T> {
    dims: [usize; 3],
    data: Vec<T>,
}

impl<T: Clone> Array3<T> {
    /// Allocates an array of the given dimensions filled with `value`.
    ///
    /// Fails instead of aborting if the allocation cannot be performed.
    pub fn try_new(dims: [usize; 3], value: T) -> Result<Self, SdfError> {
        let len = dims[0]
            .checked_mul(dims[1])
            .and_then(|n| n.checked_mul(dims[2]))
            .ok_or(SdfError::ResourceExhaustion { dims })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| SdfError::ResourceExhaustion { dims })?;
        data.resize(len, value);
        Ok(Self { dims, data })
    }
}

impl<T> Array3<T> {
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    fn linear_index(&self, (i, j, k): (usize, usize, usize)) -> usize {
        debug_assert!(i < self.dims[0] && j < self.dims[1] && k < self.dims[2]);
        i + self.dims[0] * (j + self.dims[1] * k)
    }
}

impl<T> Index<(usize, usize, usize)> for Array3<T> {
    type Output = T;

    #[inline]
    fn index(&self, ijk: (usize, usize, usize)) -> &T {
        &self.data[self.linear_index(ijk)]
    }
}

impl<T> IndexMut<(usize, usize, usize)> for Array3<T> {
    #[inline]
    fn index_mut(&mut self, ijk: (usize, usize, usize)) -> &mut T {
        let id = self.linear_index(ijk);
        &mut self.data[id]
    }
}
