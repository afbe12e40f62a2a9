//! Explicit time stepping for the 1D periodic wave field.
//!
//! One step advances velocity u and height h with fixed steps dt, dx:
//!
//! u ← u - (dt/dx) * (u ⊙ δu + g δh_prev)
//! h_new = h_prev - (dt/dx) * δ(u ⊙ (H + h_prev))
//!
//! where δ is the periodic centered difference, g = 9.81 and H = 10 is the
//! mean depth. The height update reads the velocity that was just written,
//! not the one from the previous step.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::operators::centered_diff_into;

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f64 = 9.81;

/// Mean water depth the height perturbation rides on (m).
pub const MEAN_DEPTH: f64 = 10.0;

/// Fill `h` with a Gaussian pulse centered on 1-based node `icenter`.
///
/// h[i] = exp(-decay * ((i + 1) - icenter)²)
pub fn gaussian_pulse_into(h: &mut [f64], icenter: i64, decay: f64) {
    for (i, v) in h.iter_mut().enumerate() {
        *v = gaussian(i, icenter, decay);
    }
}

/// Parallel Gaussian fill; every node is independent.
///
/// Enable with the `parallel` feature.
#[cfg(feature = "parallel")]
pub fn gaussian_pulse_into_parallel(h: &mut [f64], icenter: i64, decay: f64) {
    h.par_iter_mut()
        .enumerate()
        .for_each(|(i, v)| *v = gaussian(i, icenter, decay));
}

/// Gaussian pulse profile on `grid_size` nodes.
pub fn gaussian_pulse(grid_size: usize, icenter: i64, decay: f64) -> Vec<f64> {
    let mut h = vec![0.0; grid_size];
    gaussian_pulse_into(&mut h, icenter, decay);
    h
}

#[inline]
fn gaussian(i: usize, icenter: i64, decay: f64) -> f64 {
    let offset = (i + 1) as f64 - icenter as f64;
    (-decay * offset * offset).exp()
}

/// Velocity state and scratch buffers for the explicit scheme.
///
/// All buffers are sized once for the grid and reused on every step.
#[derive(Clone, Debug)]
pub struct ExplicitStepper {
    /// Ratio dt / dx
    courant: f64,
    velocity: Vec<f64>,
    grad_u: Vec<f64>,
    grad_h: Vec<f64>,
    flux: Vec<f64>,
}

impl ExplicitStepper {
    /// Create a stepper at rest (zero velocity).
    pub fn new(grid_size: usize, courant: f64) -> Self {
        Self {
            courant,
            velocity: vec![0.0; grid_size],
            grad_u: vec![0.0; grid_size],
            grad_h: vec![0.0; grid_size],
            flux: vec![0.0; grid_size],
        }
    }

    /// Current velocity field.
    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    /// Ratio dt / dx applied to every update.
    pub fn courant(&self) -> f64 {
        self.courant
    }

    /// Advance one step: update velocity in place, then write the new heights.
    ///
    /// # Panics
    ///
    /// Panics if `h_prev` or `h_new` does not match the grid size.
    pub fn step(&mut self, h_prev: &[f64], h_new: &mut [f64]) {
        self.update_velocity(h_prev);
        self.update_height(h_prev, h_new);
    }

    fn update_velocity(&mut self, h_prev: &[f64]) {
        // Both gradients come from pre-update values
        centered_diff_into(&self.velocity, &mut self.grad_u);
        centered_diff_into(h_prev, &mut self.grad_h);

        let r = self.courant;
        for ((u, &du), &dh) in self
            .velocity
            .iter_mut()
            .zip(&self.grad_u)
            .zip(&self.grad_h)
        {
            *u -= r * (*u * du + GRAVITY * dh);
        }
    }

    fn update_height(&mut self, h_prev: &[f64], h_new: &mut [f64]) {
        for ((f, &u), &h) in self.flux.iter_mut().zip(&self.velocity).zip(h_prev) {
            *f = u * (MEAN_DEPTH + h);
        }

        // grad_h is free again once the velocity is updated
        centered_diff_into(&self.flux, &mut self.grad_h);

        let r = self.courant;
        for ((hn, &h), &df) in h_new.iter_mut().zip(h_prev).zip(&self.grad_h) {
            *hn = h - r * df;
        }
    }
}
