//! Strongly-typed run parameters.
//!
//! [`SimParams`] is the value handed to the solver; [`Parameter`] names one of
//! its fields in error reports.

mod params;

pub use params::{Parameter, SimParams};
