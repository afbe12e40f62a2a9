//! # tsunami-rs
//!
//! Explicit finite-difference solver for a 1D shallow-water-like wave field
//! on a periodic grid.
//!
//! Starting from a Gaussian height pulse at rest, each step advances
//! velocity u and height h:
//!
//! u ← u - (dt/dx) (u δu + g δh)
//! h ← h - (dt/dx) δ(u (H + h))
//!
//! with δ the periodic centered difference, g = 9.81 and H = 10.
//!
//! This crate provides:
//! - Run parameters and their validation ([`SimParams`])
//! - Periodic difference stencils (upwind, centered)
//! - The explicit stepper and a simulation runner
//! - Column-major height history storage ([`HeightField`])
//! - Per-step diagnostics and a text history format
//! - A C ABI matching the `c_SimParams` binding
//!
//! # Example
//!
//! ```
//! use tsunami_rs::{SimParams, run_solver};
//!
//! let params = SimParams::new(3, 5, 0, 0.01, 1.0, 1.0, 1.0);
//! let h = run_solver(&params).unwrap();
//!
//! assert_eq!(h.n_columns(), 1);
//! assert_eq!(h.get(2, 0), 1.0);
//! ```

pub mod analysis;
pub mod error;
pub mod ffi;
pub mod io;
pub mod operators;
pub mod simulation;
pub mod solver;
pub mod time;
pub mod types;

// Re-export main types for convenience
pub use analysis::{ColumnDiagnostics, total_mass};
pub use error::{Result, SolverError};
pub use operators::{centered_diff, upwind_diff};
pub use simulation::{Simulation, SimulationConfig, run_solver};
pub use solver::HeightField;
pub use time::{ExplicitStepper, GRAVITY, MEAN_DEPTH, gaussian_pulse};
pub use types::{Parameter, SimParams};

#[cfg(feature = "parallel")]
pub use operators::{centered_diff_parallel, upwind_diff_parallel};
