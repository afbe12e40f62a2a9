//! Error types for the solver core.

use thiserror::Error;

use crate::types::Parameter;

/// Errors raised before a run starts.
///
/// Once a parameter set validates, neither the stencils nor the time loop can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// A run parameter violates its constraint.
    #[error("Invalid parameter `{parameter}`: {constraint}")]
    InvalidParameter {
        parameter: Parameter,
        constraint: &'static str,
    },
}

impl SolverError {
    /// Create an error for a parameter that must be strictly positive.
    pub fn must_be_positive(parameter: Parameter) -> Self {
        Self::InvalidParameter {
            parameter,
            constraint: "must be > 0",
        }
    }

    /// Create an error for a parameter that must not be negative.
    pub fn must_be_non_negative(parameter: Parameter) -> Self {
        Self::InvalidParameter {
            parameter,
            constraint: "must be >= 0",
        }
    }

    /// Create an error for a step count whose height history cannot be allocated.
    pub fn history_too_large() -> Self {
        Self::InvalidParameter {
            parameter: Parameter::Timesteps,
            constraint: "grid_size * (timesteps + 1) heights exceed addressable memory",
        }
    }

    /// The parameter this error refers to.
    pub fn parameter(&self) -> Parameter {
        match self {
            Self::InvalidParameter { parameter, .. } => *parameter,
        }
    }
}

/// Result type for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;
