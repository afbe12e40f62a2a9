//! Finite-difference stencils on a periodic 1D grid.
//!
//! Both operators map a sequence of length L to a sequence of length L and
//! wrap around at the ends, so node 0's left neighbor is node L-1 and node
//! L-1's right neighbor is node 0:
//!
//! upwind:   d[i] = x[i] - x[(i - 1 + L) % L]
//! centered: d[i] = (x[(i + 1) % L] - x[(i - 1 + L) % L]) / 2
//!
//! Neither operator divides by the grid spacing; callers scale by `1/dx`.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Index of the left neighbor of node `i` on a periodic grid of length `len`.
#[inline]
pub fn left_neighbor(i: usize, len: usize) -> usize {
    (i + len - 1) % len
}

/// Index of the right neighbor of node `i` on a periodic grid of length `len`.
#[inline]
pub fn right_neighbor(i: usize, len: usize) -> usize {
    (i + 1) % len
}

/// Backward (upwind) difference with periodic wraparound.
pub fn upwind_diff(x: &[f64]) -> Vec<f64> {
    let mut d = vec![0.0; x.len()];
    upwind_diff_into(x, &mut d);
    d
}

/// Centered difference with periodic wraparound, scaled by one half.
pub fn centered_diff(x: &[f64]) -> Vec<f64> {
    let mut d = vec![0.0; x.len()];
    centered_diff_into(x, &mut d);
    d
}

/// Write the upwind difference of `x` into `out`.
///
/// # Panics
///
/// Panics if `out` and `x` differ in length.
pub fn upwind_diff_into(x: &[f64], out: &mut [f64]) {
    assert_eq!(x.len(), out.len(), "upwind_diff: length mismatch");
    let len = x.len();
    if len == 0 {
        return;
    }

    out[0] = x[0] - x[len - 1];
    for i in 1..len {
        out[i] = x[i] - x[i - 1];
    }
}

/// Write the centered difference of `x` into `out`.
///
/// # Panics
///
/// Panics if `out` and `x` differ in length.
pub fn centered_diff_into(x: &[f64], out: &mut [f64]) {
    assert_eq!(x.len(), out.len(), "centered_diff: length mismatch");
    let len = x.len();
    if len == 0 {
        return;
    }

    for i in 0..len {
        out[i] = 0.5 * (x[right_neighbor(i, len)] - x[left_neighbor(i, len)]);
    }
}

/// Upwind difference computed with rayon, one output element per task.
///
/// Enable with the `parallel` feature.
#[cfg(feature = "parallel")]
pub fn upwind_diff_parallel(x: &[f64]) -> Vec<f64> {
    let len = x.len();
    (0..len)
        .into_par_iter()
        .map(|i| x[i] - x[left_neighbor(i, len)])
        .collect()
}

/// Centered difference computed with rayon, one output element per task.
///
/// Enable with the `parallel` feature.
#[cfg(feature = "parallel")]
pub fn centered_diff_parallel(x: &[f64]) -> Vec<f64> {
    let len = x.len();
    (0..len)
        .into_par_iter()
        .map(|i| 0.5 * (x[right_neighbor(i, len)] - x[left_neighbor(i, len)]))
        .collect()
}
