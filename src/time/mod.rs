//! Time integration.
//!
//! A single fixed-step explicit scheme: forward in time, centered in space
//! on a periodic grid, with the height update consuming the freshly updated
//! velocity.

mod explicit;

pub use explicit::{ExplicitStepper, GRAVITY, MEAN_DEPTH, gaussian_pulse, gaussian_pulse_into};

#[cfg(feature = "parallel")]
pub use explicit::gaussian_pulse_into_parallel;
