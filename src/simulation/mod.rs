//! Simulation runner.
//!
//! Ties together parameter validation, the initial condition, the explicit
//! stepper and optional diagnostics.
//!
//! # Example
//! ```
//! use tsunami_rs::simulation::Simulation;
//! use tsunami_rs::types::SimParams;
//!
//! let params = SimParams::default().with_timesteps(10);
//! let heights = Simulation::new(params)
//!     .with_diagnostics_interval(5)
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(heights.n_columns(), 11);
//! ```

mod runner;

pub use runner::{Simulation, SimulationConfig, run_solver};
