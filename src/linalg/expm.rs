// Copyright 2026 SpinDynamics Contributors
// SPDX-License-Identifier: Apache-2.0

//! Matrix exponential of Hermitian generators, via the spectral theorem.
//!
//! Every exponential this crate evaluates is of the form exp(z·H) with H
//! Hermitian — unitary propagators (z = ∓i·2π·t), Boltzmann factors
//! (z real negative) and the exponentiated Magnus generator. Diagonalizing
//! once and exponentiating the spectrum is exact up to the accuracy of the
//! eigensolver, and is the same decomposition `operator::exp_diagonalize`
//! exposes to callers.

use ndarray::Array2;
use num_complex::Complex64;

use super::{adjoint, eigh};

/// Compute `exp(z · h)` for a Hermitian matrix `h`.
///
/// `h` is diagonalized as `V·diag(λ)·V†` and the result assembled as
/// `V·diag(exp(z·λ))·V†`.
///
/// # Panics
/// Panics if `h` is not square.
pub fn exp_hermitian(h: &Array2<Complex64>, z: Complex64) -> Array2<Complex64> {
    let (eigenvalues, vectors) = eigh(h);
    let n = eigenvalues.len();
    let mut exp_d = Array2::zeros((n, n));
    for (i, &lambda) in eigenvalues.iter().enumerate() {
        exp_d[[i, i]] = (z * lambda).exp();
    }
    vectors.dot(&exp_d).dot(&adjoint(&vectors))
}
