// Copyright 2026 SpinDynamics Contributors
// SPDX-License-Identifier: Apache-2.0

//! Picture changes and free evolution.
//!
//! Both operations conjugate an operator by a unitary generated from a
//! Hamiltonian term: moving between the Schrödinger picture and a rotating
//! frame, or advancing a density matrix under a static Hamiltonian.
//! Hamiltonians are in MHz, times in microseconds; the 2π converts
//! frequency to angular phase.

use ndarray::Array2;
use num_complex::Complex64;
use std::f64::consts::PI;

use crate::linalg::{adjoint, exp_hermitian};

/// Cast an operator into the picture generated by `h_change_of_picture`,
/// or back to the Schrödinger picture when `invert` is set.
///
/// The transform is `q ↦ U†·q·U` with `U = exp(−i·2π·h·t)` (sign flipped
/// by `invert`), so for `invert = false` an operator moves into the
/// interaction frame rotating with `h_change_of_picture`.
pub fn changed_picture(
    q: &Array2<Complex64>,
    h_change_of_picture: &Array2<Complex64>,
    time: f64,
    invert: bool,
) -> Array2<Complex64> {
    let angle = if invert { 2.0 * PI * time } else { -2.0 * PI * time };
    let u = exp_hermitian(h_change_of_picture, Complex64::new(0.0, angle));
    adjoint(&u).dot(q).dot(&u)
}

/// Evolve a density matrix under a time-independent Hamiltonian.
///
/// Returns `U·ρ·U†` with `U = exp(−i·2π·H·t)`.
pub fn free_evolution(
    q: &Array2<Complex64>,
    static_hamiltonian: &Array2<Complex64>,
    time: f64,
) -> Array2<Complex64> {
    let u = exp_hermitian(static_hamiltonian, Complex64::new(0.0, -2.0 * PI * time));
    u.dot(q).dot(&adjoint(&u))
}
