// Copyright 2026 SpinDynamics Contributors
// SPDX-License-Identifier: Apache-2.0

//! Shared test utilities.

use ndarray::{Array1, Array2};
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Assert two matrices agree elementwise within `tol`.
pub fn assert_matrix_close(a: &Array2<Complex64>, b: &Array2<Complex64>, tol: f64) {
    assert_eq!(a.shape(), b.shape());
    for ((i, j), val) in a.indexed_iter() {
        let diff = (val - b[[i, j]]).norm();
        assert!(
            diff < tol,
            "Mismatch at ({}, {}): {:?} vs {:?} (diff={})",
            i,
            j,
            val,
            b[[i, j]],
            diff
        );
    }
}

/// Assert two vectors agree elementwise within `tol`.
pub fn assert_vector_close(a: &Array1<Complex64>, b: &Array1<Complex64>, tol: f64) {
    assert_eq!(a.len(), b.len());
    for (i, val) in a.iter().enumerate() {
        let diff = (val - b[i]).norm();
        assert!(
            diff < tol,
            "Mismatch at {}: {:?} vs {:?} (diff={})",
            i,
            val,
            b[i],
            diff
        );
    }
}

/// Seeded random Hermitian matrix with entries of order one.
pub fn random_hermitian(d: usize, seed: u64) -> Array2<Complex64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut m = Array2::zeros((d, d));
    for i in 0..d {
        m[[i, i]] = Complex64::new(rng.gen_range(-1.0..1.0), 0.0);
        for j in (i + 1)..d {
            let z = Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
            m[[i, j]] = z;
            m[[j, i]] = z.conj();
        }
    }
    m
}

/// Seeded random normalized state vector of length `d`.
pub fn random_state_vector(d: usize, seed: u64) -> Array1<Complex64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut v: Array1<Complex64> = Array1::zeros(d);
    for amp in v.iter_mut() {
        *amp = Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
    }
    let norm: f64 = v.iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt();
    v / Complex64::new(norm, 0.0)
}
