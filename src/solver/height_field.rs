//! Storage for the height history of a run.

use faer::Mat;

/// Height profiles for every time step of a run.
///
/// Stores `n_columns = timesteps + 1` profiles of `grid_size` nodes each in a
/// contiguous column-major array: node `i` of step `n` lives at
/// `data[i + n * grid_size]`. This is the same layout the foreign binding
/// writes into caller buffers, so [`HeightField::as_slice`] can be copied out
/// directly.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightField {
    data: Vec<f64>,
    grid_size: usize,
    n_columns: usize,
}

impl HeightField {
    /// Create a zero-filled history for `grid_size` nodes and `timesteps` steps.
    ///
    /// # Panics
    ///
    /// Panics if `grid_size` is zero or `grid_size * (timesteps + 1)` overflows.
    pub fn new(grid_size: usize, timesteps: usize) -> Self {
        assert!(grid_size > 0, "HeightField requires at least one node");
        let len = timesteps
            .checked_add(1)
            .and_then(|n| n.checked_mul(grid_size));
        let Some(len) = len else {
            panic!("HeightField of {} x ({} + 1) overflows", grid_size, timesteps);
        };
        let n_columns = timesteps + 1;
        Self {
            data: vec![0.0; len],
            grid_size,
            n_columns,
        }
    }

    /// Wrap an existing column-major buffer.
    ///
    /// Returns `None` unless `data.len()` is a positive multiple of `grid_size`.
    pub fn from_column_major(grid_size: usize, data: Vec<f64>) -> Option<Self> {
        if grid_size == 0 || data.is_empty() || data.len() % grid_size != 0 {
            return None;
        }
        let n_columns = data.len() / grid_size;
        Some(Self {
            data,
            grid_size,
            n_columns,
        })
    }

    /// Number of spatial nodes.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Number of stored columns (time steps + 1).
    pub fn n_columns(&self) -> usize {
        self.n_columns
    }

    /// Number of time steps advanced.
    pub fn timesteps(&self) -> usize {
        self.n_columns - 1
    }

    /// Height at node `i` after step `n`.
    #[inline]
    pub fn get(&self, i: usize, n: usize) -> f64 {
        debug_assert!(i < self.grid_size);
        self.data[i + n * self.grid_size]
    }

    /// Height profile after step `n`.
    pub fn column(&self, n: usize) -> &[f64] {
        let start = n * self.grid_size;
        &self.data[start..start + self.grid_size]
    }

    /// Mutable height profile for step `n`.
    pub fn column_mut(&mut self, n: usize) -> &mut [f64] {
        let start = n * self.grid_size;
        &mut self.data[start..start + self.grid_size]
    }

    /// Previous profile (read-only) and profile `n` (mutable) at the same time.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero or out of range.
    pub(crate) fn split_step_mut(&mut self, n: usize) -> (&[f64], &mut [f64]) {
        assert!(n >= 1 && n < self.n_columns, "step {} out of range", n);
        let start = n * self.grid_size;
        let (before, after) = self.data.split_at_mut(start);
        (&before[start - self.grid_size..], &mut after[..self.grid_size])
    }

    /// Iterate over the profiles in time order.
    pub fn columns(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.grid_size)
    }

    /// Final height profile.
    pub fn last_column(&self) -> &[f64] {
        self.column(self.n_columns - 1)
    }

    /// Flat column-major view of the whole history.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consume the history and return the flat column-major buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Copy the history into a dense `(grid_size, n_columns)` matrix.
    pub fn to_mat(&self) -> Mat<f64> {
        Mat::from_fn(self.grid_size, self.n_columns, |i, n| self.get(i, n))
    }
}
