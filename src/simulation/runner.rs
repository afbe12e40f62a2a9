//! Simulation runner implementation.
//!
//! Turns a [`SimParams`] into a complete [`HeightField`] history.

use crate::analysis::ColumnDiagnostics;
use crate::error::Result;
use crate::solver::HeightField;
use crate::time::ExplicitStepper;
use crate::types::SimParams;

// =============================================================================
// Simulation Configuration
// =============================================================================

/// Configuration for a simulation run.
///
/// None of these settings change the computed heights.
#[derive(Clone, Debug, Default)]
pub struct SimulationConfig {
    /// Log column diagnostics every this many steps (`None` disables).
    pub diagnostics_interval: Option<usize>,
}

impl SimulationConfig {
    /// Set the diagnostics interval. Zero disables diagnostics.
    pub fn with_diagnostics_interval(mut self, interval: usize) -> Self {
        self.diagnostics_interval = (interval > 0).then_some(interval);
        self
    }
}

// =============================================================================
// Simulation Runner
// =============================================================================

/// High-level simulation runner.
///
/// Each call to [`Simulation::run`] allocates its own height history and
/// velocity buffers, so runs share no state and repeated runs with the same
/// parameters produce bit-identical output.
#[derive(Clone, Debug)]
pub struct Simulation {
    params: SimParams,
    config: SimulationConfig,
}

impl Simulation {
    /// Create a simulation with default configuration.
    pub fn new(params: SimParams) -> Self {
        Self {
            params,
            config: SimulationConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Log diagnostics every `interval` steps.
    pub fn with_diagnostics_interval(mut self, interval: usize) -> Self {
        self.config = self.config.with_diagnostics_interval(interval);
        self
    }

    /// Parameters of this simulation.
    pub fn params(&self) -> &SimParams {
        &self.params
    }

    /// Run the simulation and return the full height history.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidParameter`](crate::error::SolverError) if
    /// validation fails; nothing is allocated in that case.
    pub fn run(&self) -> Result<HeightField> {
        self.run_with_callback(|_, _| {})
    }

    /// Run the simulation, calling `callback(step, heights)` for the initial
    /// profile and after every completed step.
    pub fn run_with_callback<F>(&self, mut callback: F) -> Result<HeightField>
    where
        F: FnMut(usize, &[f64]),
    {
        self.params.validate()?;

        let p = &self.params;
        let start_wall = std::time::Instant::now();

        log::debug!(
            "Starting run: grid_size = {}, timesteps = {}, dt = {}, dx = {}, icenter = {}, decay = {}",
            p.grid_size,
            p.timesteps,
            p.dt,
            p.dx,
            p.icenter,
            p.decay
        );

        let mut heights = HeightField::new(p.grid_size, p.timesteps);
        fill_initial_condition(heights.column_mut(0), p);
        callback(0, heights.column(0));
        self.report(0, heights.column(0));

        let mut stepper = ExplicitStepper::new(p.grid_size, p.courant_ratio());
        let mut warned_non_finite = false;

        for n in 1..=p.timesteps {
            let (h_prev, h_new) = heights.split_step_mut(n);
            stepper.step(h_prev, h_new);

            let h_new = heights.column(n);
            callback(n, h_new);
            self.report(n, h_new);

            if !warned_non_finite && h_new.iter().any(|h| !h.is_finite()) {
                log::warn!(
                    "Non-finite height at step {} (dt/dx = {:.3e}); later steps will propagate it",
                    n,
                    p.courant_ratio()
                );
                warned_non_finite = true;
            }
        }

        log::debug!(
            "Run complete: {} steps in {:.3}s",
            p.timesteps,
            start_wall.elapsed().as_secs_f64()
        );

        Ok(heights)
    }

    fn report(&self, step: usize, column: &[f64]) {
        let Some(interval) = self.config.diagnostics_interval else {
            return;
        };
        if step % interval != 0 || !log::log_enabled!(log::Level::Debug) {
            return;
        }

        let d = ColumnDiagnostics::from_column(step, column, self.params.dx);
        log::debug!(
            "  Step {}: mass = {:.6e}, h in [{:.4e}, {:.4e}], peak at node {}",
            step,
            d.mass,
            d.min_height,
            d.max_height,
            d.peak_index + 1
        );
    }
}

#[cfg(not(feature = "parallel"))]
fn fill_initial_condition(h: &mut [f64], p: &SimParams) {
    crate::time::gaussian_pulse_into(h, p.icenter, p.decay);
}

#[cfg(feature = "parallel")]
fn fill_initial_condition(h: &mut [f64], p: &SimParams) {
    crate::time::gaussian_pulse_into_parallel(h, p.icenter, p.decay);
}

/// Validate `params` and run a simulation with default configuration.
pub fn run_solver(params: &SimParams) -> Result<HeightField> {
    Simulation::new(*params).run()
}
