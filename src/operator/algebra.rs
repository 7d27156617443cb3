// Copyright 2026 SpinDynamics Contributors
// SPDX-License-Identifier: Apache-2.0

//! Diagonalization, commutators and physical-state diagnostics.

use ndarray::Array2;
use num_complex::Complex64;

use crate::linalg::{eigh, trace};

/// Relative tolerance on the trace-one check.
const UNIT_TRACE_RTOL: f64 = 1e-6;

/// Floor below zero tolerated on eigenvalues by the positivity check.
const POSITIVITY_FLOOR: f64 = -1e-10;

/// Commutator [A, B] = A·B − B·A.
pub fn commutator(a: &Array2<Complex64>, b: &Array2<Complex64>) -> Array2<Complex64> {
    a.dot(b) - b.dot(a)
}

/// Diagonalize an operator and exponentiate its eigenvalue matrix.
///
/// Returns `(u, d, d_exp)`: the eigenvector matrix (columns in
/// decomposition order), the diagonal eigenvalue matrix, and the diagonal
/// matrix of exponentiated eigenvalues, so `q = u·d·u†` and
/// `exp(q) = u·d_exp·u†`. The intended input is Hermitian; behavior on
/// non-diagonalizable operators is undefined.
pub fn exp_diagonalize(
    q: &Array2<Complex64>,
) -> (Array2<Complex64>, Array2<Complex64>, Array2<Complex64>) {
    let (eigenvalues, u) = eigh(q);
    let n = eigenvalues.len();
    let mut d = Array2::zeros((n, n));
    let mut d_exp = Array2::zeros((n, n));
    for (i, &lambda) in eigenvalues.iter().enumerate() {
        d[[i, i]] = Complex64::new(lambda, 0.0);
        d_exp[[i, i]] = Complex64::new(lambda.exp(), 0.0);
    }
    (u, d, d_exp)
}

/// Whether the operator has trace 1 within relative tolerance 1e-6.
pub fn unit_trace(q: &Array2<Complex64>) -> bool {
    (trace(q) - Complex64::new(1.0, 0.0)).norm() <= UNIT_TRACE_RTOL
}

/// Whether the operator is positive, i.e. every eigenvalue is
/// non-negative up to a −1e-10 floating-point floor.
pub fn positivity(q: &Array2<Complex64>) -> bool {
    let (eigenvalues, _) = eigh(q);
    eigenvalues.iter().all(|&lambda| lambda >= POSITIVITY_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::{adjoint, identity};
    use crate::test_utils::{assert_matrix_close, random_hermitian};
    use approx::assert_relative_eq;
    use ndarray::array;

    fn sigma_x() -> Array2<Complex64> {
        array![
            [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
            [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)]
        ]
    }

    fn sigma_z() -> Array2<Complex64> {
        array![
            [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
            [Complex64::new(0.0, 0.0), Complex64::new(-1.0, 0.0)]
        ]
    }

    #[test]
    fn test_commutator_with_itself_vanishes() {
        let a = random_hermitian(4, 21);
        let zero = Array2::zeros((4, 4));
        assert_matrix_close(&commutator(&a, &a), &zero, 1e-14);
    }

    #[test]
    fn test_commutator_pauli_algebra() {
        // [σx, σz] = −2i·σy
        let expected = array![
            [Complex64::new(0.0, 0.0), Complex64::new(0.0, 2.0)],
            [Complex64::new(0.0, -2.0), Complex64::new(0.0, 0.0)]
        ];
        assert_matrix_close(&commutator(&sigma_x(), &sigma_z()), &expected, 1e-14);
    }

    #[test]
    fn test_commutator_antisymmetry() {
        let a = random_hermitian(3, 5);
        let b = random_hermitian(3, 6);
        let ab = commutator(&a, &b);
        let ba = commutator(&b, &a);
        assert_matrix_close(&ab, &ba.mapv(|z| -z), 1e-12);
    }

    #[test]
    fn test_exp_diagonalize_sigma_z() {
        let (u, d, d_exp) = exp_diagonalize(&sigma_z());
        // Ascending order: −1 then +1.
        assert_relative_eq!(d[[0, 0]].re, -1.0, epsilon = 1e-12);
        assert_relative_eq!(d[[1, 1]].re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(d_exp[[0, 0]].re, (-1.0f64).exp(), epsilon = 1e-12);
        assert_relative_eq!(d_exp[[1, 1]].re, 1.0f64.exp(), epsilon = 1e-12);
        assert_matrix_close(&u.dot(&d).dot(&adjoint(&u)), &sigma_z(), 1e-12);
    }

    #[test]
    fn test_exp_diagonalize_reconstructs_exponential() {
        let q = random_hermitian(4, 17);
        let (u, _, d_exp) = exp_diagonalize(&q);
        let via_diag = u.dot(&d_exp).dot(&adjoint(&u));
        let direct = crate::linalg::exp_hermitian(&q, Complex64::new(1.0, 0.0));
        assert_matrix_close(&via_diag, &direct, 1e-9);
    }

    #[test]
    fn test_unit_trace_predicate() {
        let rho = array![
            [Complex64::new(0.5, 0.0), Complex64::new(0.0, 0.0)],
            [Complex64::new(0.0, 0.0), Complex64::new(0.5, 0.0)]
        ];
        assert!(unit_trace(&rho));
        assert!(!unit_trace(&identity(2)));
    }

    #[test]
    fn test_unit_trace_within_tolerance() {
        let mut rho = Array2::<Complex64>::zeros((2, 2));
        rho[[0, 0]] = Complex64::new(1.0 + 5e-7, 0.0);
        assert!(unit_trace(&rho));
        rho[[0, 0]] = Complex64::new(1.0 + 5e-5, 0.0);
        assert!(!unit_trace(&rho));
    }

    #[test]
    fn test_positivity_predicate() {
        assert!(positivity(&identity(3)));
        assert!(!positivity(&sigma_z()));
        // A tiny negative eigenvalue from rounding is absorbed.
        let mut nearly = identity(2);
        nearly[[1, 1]] = Complex64::new(-1e-12, 0.0);
        assert!(positivity(&nearly));
    }
}
