//! Spatial difference operators.
//!
//! The solver only needs two stencils on a periodic grid:
//! - **Upwind**: one-sided backward difference
//! - **Centered**: symmetric second-order difference
//!
//! All operators are pure functions of their input slice. The `*_into`
//! variants write into caller-owned buffers so the time loop can reuse
//! scratch storage across steps.

mod periodic;

pub use periodic::{
    centered_diff, centered_diff_into, left_neighbor, right_neighbor, upwind_diff,
    upwind_diff_into,
};

#[cfg(feature = "parallel")]
pub use periodic::{centered_diff_parallel, upwind_diff_parallel};
