//! Periodic stencil tests against a direct 1-based transcription of the
//! stencils, for every small grid length.

use tsunami_rs::{centered_diff, upwind_diff};

/// Backward difference written with 1-based indices i = 1..L.
fn upwind_one_based(x: &[f64]) -> Vec<f64> {
    let l = x.len();
    let at = |i: usize| x[i - 1];
    let mut d = vec![0.0; l];
    d[0] = at(1) - at(l);
    for i in 2..=l {
        d[i - 1] = at(i) - at(i - 1);
    }
    d
}

/// Centered difference written with 1-based indices i = 1..L.
fn centered_one_based(x: &[f64]) -> Vec<f64> {
    let l = x.len();
    let at = |i: usize| x[i - 1];
    let mut d = vec![0.0; l];
    d[0] = 0.5 * (at(2) - at(l));
    d[l - 1] = 0.5 * (at(1) - at(l - 1));
    for i in 2..l {
        d[i - 1] = 0.5 * (at(i + 1) - at(i - 1));
    }
    d
}

fn sample(len: usize, seed: usize) -> Vec<f64> {
    (0..len)
        .map(|i| ((i * 7 + seed * 13) as f64 * 0.37).sin() * (1.0 + seed as f64))
        .collect()
}

#[test]
fn test_matches_one_based_reference() {
    for len in 2..=12 {
        for seed in 0..5 {
            let x = sample(len, seed);
            assert_eq!(upwind_diff(&x), upwind_one_based(&x), "upwind, L = {}", len);
            assert_eq!(
                centered_diff(&x),
                centered_one_based(&x),
                "centered, L = {}",
                len
            );
        }
    }
}

#[test]
fn test_constant_sequence_gives_zero() {
    for len in 2..=10 {
        let x = vec![3.25; len];
        assert_eq!(upwind_diff(&x), vec![0.0; len]);
        assert_eq!(centered_diff(&x), vec![0.0; len]);
    }
}

#[test]
fn test_ramp_interior_and_wrap() {
    for len in 3..=10 {
        let x: Vec<f64> = (0..len).map(|i| i as f64).collect();
        let d = centered_diff(&x);

        for (i, &v) in d.iter().enumerate().take(len - 1).skip(1) {
            assert_eq!(v, 1.0, "interior node {} of L = {}", i, len);
        }

        // Wrap injects the jump between L-1 and 0
        let wrap = (2.0 - len as f64) / 2.0;
        assert_eq!(d[0], wrap);
        assert_eq!(d[len - 1], wrap);
        assert_ne!(d[0], 1.0);
    }
}

#[test]
fn test_upwind_ramp() {
    let x: Vec<f64> = (0..6).map(|i| i as f64).collect();
    assert_eq!(upwind_diff(&x), vec![-5.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn test_output_length_matches_input() {
    for len in 0..8 {
        let x = sample(len, 1);
        assert_eq!(upwind_diff(&x).len(), len);
        assert_eq!(centered_diff(&x).len(), len);
    }
}
