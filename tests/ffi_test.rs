//! Tests for the C ABI entry points, called the way a C caller would.

use tsunami_rs::SimParams;
use tsunami_rs::ffi::{
    CSimParams, TSUNAMI_BUFFER_TOO_SMALL, TSUNAMI_INVALID_PARAMETER, TSUNAMI_NULL_POINTER,
    TSUNAMI_OK, c_run_solver, tsunami_run_solver,
};
use tsunami_rs::run_solver;

fn c_params() -> CSimParams {
    CSimParams {
        icenter: 25,
        grid_size: 100,
        timesteps: 20,
        dt: 0.02,
        dx: 1.0,
        c: 1.0,
        decay: 0.02,
    }
}

#[test]
fn test_c_run_solver_fills_column_major_buffer() {
    let params = c_params();
    let mut h = vec![f64::NAN; params.output_len().unwrap()];

    unsafe { c_run_solver(&params, h.as_mut_ptr()) };

    let expected = run_solver(&SimParams::try_from(&params).unwrap()).unwrap();
    assert_eq!(h.as_slice(), expected.as_slice());
    // Element (i, n) sits at i + n * grid_size
    assert_eq!(h[7 + 3 * 100], expected.get(7, 3));
}

#[test]
fn test_status_entry_point_ok() {
    let params = c_params();
    let len = params.output_len().unwrap();
    // Extra tail must stay untouched
    let mut h = vec![-1.0; len + 5];

    let status = unsafe { tsunami_run_solver(&params, h.as_mut_ptr(), h.len()) };

    assert_eq!(status, TSUNAMI_OK);
    let expected = run_solver(&SimParams::try_from(&params).unwrap()).unwrap();
    assert_eq!(&h[..len], expected.as_slice());
    assert!(h[len..].iter().all(|&v| v == -1.0));
}

#[test]
fn test_status_invalid_parameter_writes_nothing() {
    for params in [
        CSimParams {
            grid_size: 0,
            ..c_params()
        },
        CSimParams {
            dt: 0.0,
            ..c_params()
        },
        CSimParams {
            c: -2.0,
            ..c_params()
        },
        CSimParams {
            timesteps: -3,
            ..c_params()
        },
    ] {
        let mut h = vec![-1.0; 4096];
        let status = unsafe { tsunami_run_solver(&params, h.as_mut_ptr(), h.len()) };
        assert_eq!(status, TSUNAMI_INVALID_PARAMETER, "{:?}", params);
        assert!(h.iter().all(|&v| v == -1.0));
    }
}

#[test]
fn test_status_buffer_too_small() {
    let params = c_params();
    let mut h = vec![-1.0; params.output_len().unwrap() - 1];

    let status = unsafe { tsunami_run_solver(&params, h.as_mut_ptr(), h.len()) };

    assert_eq!(status, TSUNAMI_BUFFER_TOO_SMALL);
    assert!(h.iter().all(|&v| v == -1.0));
}

#[test]
fn test_status_null_pointers() {
    let params = c_params();
    let mut h = vec![0.0; 8];

    let status = unsafe { tsunami_run_solver(std::ptr::null(), h.as_mut_ptr(), h.len()) };
    assert_eq!(status, TSUNAMI_NULL_POINTER);

    let status = unsafe { tsunami_run_solver(&params, std::ptr::null_mut(), 0) };
    assert_eq!(status, TSUNAMI_NULL_POINTER);
}

#[test]
fn test_struct_layout_matches_c() {
    // int, int, int, (pad), double x4
    assert_eq!(std::mem::size_of::<CSimParams>(), 48);
    assert_eq!(std::mem::offset_of!(CSimParams, timesteps), 8);
    assert_eq!(std::mem::offset_of!(CSimParams, dt), 16);
    assert_eq!(std::mem::offset_of!(CSimParams, decay), 40);
}
