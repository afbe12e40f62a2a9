//! Run parameters for the 1D tsunami solver.
//!
//! A [`SimParams`] holds the six scalars that fully determine a run: where the
//! initial pulse sits, how large the grid is, how many steps to take, the
//! time and space steps, the background flow speed and the Gaussian decay.
//!
//! # Example
//!
//! ```
//! use tsunami_rs::types::SimParams;
//!
//! let params = SimParams::default()
//!     .with_grid_size(50)
//!     .with_icenter(10)
//!     .with_timesteps(20);
//!
//! assert!(params.validate().is_ok());
//! assert_eq!(params.n_columns(), 21);
//! ```

use std::fmt;

use crate::error::{Result, SolverError};

/// Identifies a single run parameter.
///
/// Used in [`SolverError::InvalidParameter`] to name the offending field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parameter {
    Icenter,
    GridSize,
    Timesteps,
    Dt,
    Dx,
    C,
    Decay,
}

impl Parameter {
    /// Field name as it appears in the binding struct and on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Parameter::Icenter => "icenter",
            Parameter::GridSize => "grid_size",
            Parameter::Timesteps => "timesteps",
            Parameter::Dt => "dt",
            Parameter::Dx => "dx",
            Parameter::C => "c",
            Parameter::Decay => "decay",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters of a single simulation run.
///
/// Fields are stored verbatim; nothing is derived at construction time.
/// Call [`SimParams::validate`] before using a value that came from outside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimParams {
    /// Node number of the initial pulse center (1-based: node 1 is the first grid point).
    pub icenter: i64,
    /// Number of spatial nodes.
    pub grid_size: usize,
    /// Number of time steps to advance.
    pub timesteps: usize,
    /// Time step.
    pub dt: f64,
    /// Spatial step.
    pub dx: f64,
    /// Background flow speed. Validated but not used by the update equations.
    pub c: f64,
    /// Decay rate of the initial Gaussian pulse.
    pub decay: f64,
}

impl SimParams {
    /// Create a parameter set from its six fields.
    pub fn new(
        icenter: i64,
        grid_size: usize,
        timesteps: usize,
        dt: f64,
        dx: f64,
        c: f64,
        decay: f64,
    ) -> Self {
        Self {
            icenter,
            grid_size,
            timesteps,
            dt,
            dx,
            c,
            decay,
        }
    }

    /// Check the parameter constraints.
    ///
    /// Checks run in a fixed order (`grid_size`, `dt`, `dx`, `c`) and the first
    /// failure is returned. `icenter` and `decay` are accepted as given.
    /// NaN values fail because they do not compare greater than zero.
    ///
    /// Finally `timesteps` is rejected if the history of
    /// `grid_size * (timesteps + 1)` values cannot be addressed.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(SolverError::must_be_positive(Parameter::GridSize));
        }
        if !(self.dt > 0.0) {
            return Err(SolverError::must_be_positive(Parameter::Dt));
        }
        if !(self.dx > 0.0) {
            return Err(SolverError::must_be_positive(Parameter::Dx));
        }
        if !(self.c > 0.0) {
            return Err(SolverError::must_be_positive(Parameter::C));
        }
        if self.history_len().is_none() {
            return Err(SolverError::history_too_large());
        }
        Ok(())
    }

    /// Number of stored heights, `grid_size * (timesteps + 1)`.
    ///
    /// `None` if the count overflows or the buffer would exceed `isize::MAX` bytes.
    pub fn history_len(&self) -> Option<usize> {
        let len = self.timesteps.checked_add(1)?.checked_mul(self.grid_size)?;
        let bytes = len.checked_mul(std::mem::size_of::<f64>())?;
        (bytes <= isize::MAX as usize).then_some(len)
    }

    /// Ratio `dt / dx` that scales every update.
    #[inline]
    pub fn courant_ratio(&self) -> f64 {
        self.dt / self.dx
    }

    /// Number of stored height columns, `timesteps + 1`.
    #[inline]
    pub fn n_columns(&self) -> usize {
        self.timesteps + 1
    }

    /// Set the pulse center node (1-based).
    pub fn with_icenter(mut self, icenter: i64) -> Self {
        self.icenter = icenter;
        self
    }

    /// Set the number of grid nodes.
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Set the number of time steps.
    pub fn with_timesteps(mut self, timesteps: usize) -> Self {
        self.timesteps = timesteps;
        self
    }

    /// Set the time step.
    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Set the spatial step.
    pub fn with_dx(mut self, dx: f64) -> Self {
        self.dx = dx;
        self
    }

    /// Set the background flow speed.
    pub fn with_c(mut self, c: f64) -> Self {
        self.c = c;
        self
    }

    /// Set the Gaussian decay rate.
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }
}

impl Default for SimParams {
    /// Reference run: a pulse at node 25 on a 100-node grid, 100 steps.
    ///
    /// `dt = 0.02` keeps the scheme stable for g = 9.81 and a mean depth of 10.
    fn default() -> Self {
        Self {
            icenter: 25,
            grid_size: 100,
            timesteps: 100,
            dt: 0.02,
            dx: 1.0,
            c: 1.0,
            decay: 0.02,
        }
    }
}
