//! C ABI for the solver.
//!
//! Two entry points share the [`CSimParams`] struct layout declared in
//! `include/tsunami.h`:
//!
//! - [`c_run_solver`]: returns nothing and aborts the process on invalid input.
//! - [`tsunami_run_solver`]: returns a status code and leaves the output
//!   buffer untouched on failure.
//!
//! Both write the history column-major: node `i` of step `n` goes to
//! `h[i + n * grid_size]`, `grid_size * (timesteps + 1)` values in total.

use std::ffi::{c_double, c_int};

use crate::error::SolverError;
use crate::simulation::run_solver;
use crate::solver::HeightField;
use crate::types::{Parameter, SimParams};

/// Success.
pub const TSUNAMI_OK: c_int = 0;
/// A parameter failed validation.
pub const TSUNAMI_INVALID_PARAMETER: c_int = 1;
/// `params` or `h` was null.
pub const TSUNAMI_NULL_POINTER: c_int = 2;
/// The output buffer is shorter than `grid_size * (timesteps + 1)`.
pub const TSUNAMI_BUFFER_TOO_SMALL: c_int = 3;

/// Run parameters as laid out by C callers.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CSimParams {
    pub icenter: c_int,
    pub grid_size: c_int,
    pub timesteps: c_int,
    pub dt: c_double,
    pub dx: c_double,
    pub c: c_double,
    pub decay: c_double,
}

impl CSimParams {
    /// Number of doubles the output buffer must hold, if the sizes are non-negative.
    pub fn output_len(&self) -> Option<usize> {
        let grid_size = usize::try_from(self.grid_size).ok()?;
        let columns = usize::try_from(self.timesteps).ok()?.checked_add(1)?;
        grid_size.checked_mul(columns)
    }
}

impl From<&SimParams> for CSimParams {
    /// Convert for passing to C. Sizes saturate at `c_int::MAX`.
    fn from(p: &SimParams) -> Self {
        Self {
            icenter: p.icenter.clamp(c_int::MIN as i64, c_int::MAX as i64) as c_int,
            grid_size: c_int::try_from(p.grid_size).unwrap_or(c_int::MAX),
            timesteps: c_int::try_from(p.timesteps).unwrap_or(c_int::MAX),
            dt: p.dt,
            dx: p.dx,
            c: p.c,
            decay: p.decay,
        }
    }
}

impl TryFrom<&CSimParams> for SimParams {
    type Error = SolverError;

    /// Validate and convert.
    ///
    /// Checks `grid_size`, `dt`, `dx`, `c` in that order, then rejects a
    /// negative `timesteps` or a history too large to allocate.
    fn try_from(c: &CSimParams) -> Result<Self, Self::Error> {
        let grid_size = usize::try_from(c.grid_size)
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| SolverError::must_be_positive(Parameter::GridSize))?;

        let params = SimParams::new(
            i64::from(c.icenter),
            grid_size,
            0,
            c.dt,
            c.dx,
            c.c,
            c.decay,
        );
        params.validate()?;

        let timesteps = usize::try_from(c.timesteps)
            .map_err(|_| SolverError::must_be_non_negative(Parameter::Timesteps))?;

        let params = params.with_timesteps(timesteps);
        params.validate()?;
        Ok(params)
    }
}

fn solve(params: &CSimParams) -> Result<HeightField, SolverError> {
    let params = SimParams::try_from(params)?;
    run_solver(&params)
}

/// Fill `h` with the height history for `params`, aborting on invalid input.
///
/// # Safety
///
/// `params` must point to a valid `CSimParams`, and `h` must point to at
/// least `grid_size * (timesteps + 1)` writable doubles.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn c_run_solver(params: *const CSimParams, h: *mut c_double) {
    if params.is_null() || h.is_null() {
        log::error!("c_run_solver: null pointer argument");
        eprintln!("c_run_solver: null pointer argument");
        std::process::abort();
    }

    // SAFETY: checked non-null above; the caller guarantees validity.
    let params = unsafe { &*params };
    match solve(params) {
        Ok(heights) => {
            let src = heights.as_slice();
            // SAFETY: the caller guarantees `h` holds grid_size * (timesteps + 1) doubles.
            let dst = unsafe { std::slice::from_raw_parts_mut(h, src.len()) };
            dst.copy_from_slice(src);
        }
        Err(err) => {
            log::error!("c_run_solver: {}", err);
            eprintln!("c_run_solver: {}", err);
            std::process::abort();
        }
    }
}

/// Fill `h` with the height history for `params` and report a status code.
///
/// `len` is the number of doubles `h` can hold. Nothing is written unless the
/// return value is [`TSUNAMI_OK`].
///
/// # Safety
///
/// `params` must be null or point to a valid `CSimParams`, and `h` must be
/// null or point to at least `len` writable doubles.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tsunami_run_solver(
    params: *const CSimParams,
    h: *mut c_double,
    len: usize,
) -> c_int {
    if params.is_null() || h.is_null() {
        return TSUNAMI_NULL_POINTER;
    }

    // SAFETY: checked non-null above; the caller guarantees validity.
    let params = unsafe { &*params };
    let converted = match SimParams::try_from(params) {
        Ok(p) => p,
        Err(err) => {
            log::warn!("tsunami_run_solver: {}", err);
            return TSUNAMI_INVALID_PARAMETER;
        }
    };

    let Some(needed) = converted.history_len() else {
        return TSUNAMI_INVALID_PARAMETER;
    };
    if len < needed {
        log::warn!(
            "tsunami_run_solver: output buffer holds {} values, need {}",
            len,
            needed
        );
        return TSUNAMI_BUFFER_TOO_SMALL;
    }

    match run_solver(&converted) {
        Ok(heights) => {
            // SAFETY: `h` holds at least `len >= needed` doubles.
            let dst = unsafe { std::slice::from_raw_parts_mut(h, needed) };
            dst.copy_from_slice(heights.as_slice());
            TSUNAMI_OK
        }
        Err(err) => {
            log::warn!("tsunami_run_solver: {}", err);
            TSUNAMI_INVALID_PARAMETER
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c_params() -> CSimParams {
        CSimParams {
            icenter: 3,
            grid_size: 5,
            timesteps: 2,
            dt: 0.01,
            dx: 1.0,
            c: 1.0,
            decay: 1.0,
        }
    }

    #[test]
    fn test_conversion_keeps_fields() {
        let p = SimParams::try_from(&c_params()).unwrap();
        assert_eq!(p, SimParams::new(3, 5, 2, 0.01, 1.0, 1.0, 1.0));
        assert_eq!(CSimParams::from(&p), c_params());
    }

    #[test]
    fn test_negative_grid_size_rejected() {
        let c = CSimParams {
            grid_size: -4,
            ..c_params()
        };
        let err = SimParams::try_from(&c).unwrap_err();
        assert_eq!(err.parameter(), Parameter::GridSize);
    }

    #[test]
    fn test_negative_timesteps_rejected_after_other_checks() {
        let c = CSimParams {
            timesteps: -1,
            ..c_params()
        };
        let err = SimParams::try_from(&c).unwrap_err();
        assert_eq!(err, SolverError::must_be_non_negative(Parameter::Timesteps));

        let c = CSimParams { dx: 0.0, ..c };
        let err = SimParams::try_from(&c).unwrap_err();
        assert_eq!(err.parameter(), Parameter::Dx);
    }

    #[test]
    fn test_oversized_history_rejected() {
        let c = CSimParams {
            grid_size: c_int::MAX,
            timesteps: c_int::MAX,
            ..c_params()
        };
        let err = SimParams::try_from(&c).unwrap_err();
        assert_eq!(err, SolverError::history_too_large());

        let mut h = [0.0; 1];
        let status = unsafe { tsunami_run_solver(&c, h.as_mut_ptr(), usize::MAX) };
        assert_eq!(status, TSUNAMI_INVALID_PARAMETER);
    }

    #[test]
    fn test_output_len() {
        assert_eq!(c_params().output_len(), Some(15));
        let c = CSimParams {
            timesteps: -1,
            ..c_params()
        };
        assert_eq!(c.output_len(), None);
    }

    #[test]
    fn test_from_saturates_sizes() {
        let p = SimParams::default().with_grid_size(usize::MAX).with_icenter(i64::MIN);
        let c = CSimParams::from(&p);
        assert_eq!(c.grid_size, c_int::MAX);
        assert_eq!(c.icenter, c_int::MIN);
    }
}
