// Copyright 2026 SpinDynamics Contributors
// SPDX-License-Identifier: Apache-2.0

//! Dense complex linear algebra for small Hilbert spaces.
//!
//! Everything the operator algebra needs from a matrix library lives here:
//! adjoints, traces, vector normalization, a Hermitian eigensolver and the
//! spectral matrix exponential built on it. The matrices this crate sees are
//! tiny (2^n × 2^n for a handful of qubits), so the kernels are plain dense
//! loops with no blocking or external BLAS.

pub mod eig;
pub mod expm;

use ndarray::{Array1, Array2};
use num_complex::Complex64;

use crate::error::{InvalidInputError, Result};

pub use eig::eigh;
pub use expm::exp_hermitian;

/// Conjugate transpose (dagger) of a matrix.
pub fn adjoint(a: &Array2<Complex64>) -> Array2<Complex64> {
    a.t().mapv(|z| z.conj())
}

/// Trace of a square matrix.
pub fn trace(a: &Array2<Complex64>) -> Complex64 {
    let mut tr = Complex64::new(0.0, 0.0);
    for i in 0..a.nrows().min(a.ncols()) {
        tr += a[[i, i]];
    }
    tr
}

/// Identity matrix of dimension `d`.
pub fn identity(d: usize) -> Array2<Complex64> {
    Array2::from_diag_elem(d, Complex64::new(1.0, 0.0))
}

/// Divide a vector by its L2 norm.
///
/// A zero (or non-finite) vector cannot be normalized and is rejected
/// instead of propagating NaNs into downstream state construction.
pub fn normalize(a: &Array1<Complex64>) -> Result<Array1<Complex64>> {
    let norm_sq: f64 = a.iter().map(|z| z.norm_sqr()).sum();
    let norm = norm_sq.sqrt();
    if norm == 0.0 || !norm.is_finite() {
        return Err(InvalidInputError::ZeroNorm.into());
    }
    Ok(a / Complex64::new(norm, 0.0))
}

/// Hermitian part of a matrix, (A + A†)/2.
///
/// Used to scrub the floating-point anti-Hermitian residue off operators
/// that are Hermitian by construction before they reach the eigensolver.
pub fn hermitize(a: &Array2<Complex64>) -> Array2<Complex64> {
    let half = Complex64::new(0.5, 0.0);
    (a + &adjoint(a)) * half
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_adjoint_conjugates_and_transposes() {
        let m = array![
            [Complex64::new(1.0, 2.0), Complex64::new(3.0, -4.0)],
            [Complex64::new(0.0, 1.0), Complex64::new(5.0, 0.0)]
        ];
        let dag = adjoint(&m);
        assert_eq!(dag[[0, 0]], Complex64::new(1.0, -2.0));
        assert_eq!(dag[[0, 1]], Complex64::new(0.0, -1.0));
        assert_eq!(dag[[1, 0]], Complex64::new(3.0, 4.0));
        assert_eq!(dag[[1, 1]], Complex64::new(5.0, 0.0));
    }

    #[test]
    fn test_adjoint_is_involutive() {
        let m = array![
            [Complex64::new(1.0, 1.0), Complex64::new(2.0, -1.0)],
            [Complex64::new(-3.0, 0.5), Complex64::new(0.0, -2.0)]
        ];
        assert_eq!(adjoint(&adjoint(&m)), m);
    }

    #[test]
    fn test_trace_sums_diagonal() {
        let m = array![
            [Complex64::new(1.0, 1.0), Complex64::new(9.0, 9.0)],
            [Complex64::new(9.0, 9.0), Complex64::new(2.0, -3.0)]
        ];
        assert_eq!(trace(&m), Complex64::new(3.0, -2.0));
    }

    #[test]
    fn test_identity_shape_and_values() {
        let eye = identity(3);
        assert_eq!(eye.dim(), (3, 3));
        assert_eq!(trace(&eye), Complex64::new(3.0, 0.0));
        assert_eq!(eye[[0, 1]], Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_normalize_produces_unit_vector() {
        let v = array![Complex64::new(3.0, 0.0), Complex64::new(0.0, 4.0)];
        let u = normalize(&v).unwrap();
        let norm: f64 = u.iter().map(|z| z.norm_sqr()).sum();
        assert_relative_eq!(norm, 1.0, epsilon = 1e-12);
        assert_relative_eq!(u[0].re, 0.6, epsilon = 1e-12);
        assert_relative_eq!(u[1].im, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_rejects_zero_vector() {
        let v = array![Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)];
        assert!(normalize(&v).is_err());
    }

    #[test]
    fn test_hermitize_fixed_point_for_hermitian() {
        let h = array![
            [Complex64::new(2.0, 0.0), Complex64::new(1.0, -1.0)],
            [Complex64::new(1.0, 1.0), Complex64::new(-2.0, 0.0)]
        ];
        let out = hermitize(&h);
        for (a, b) in out.iter().zip(h.iter()) {
            assert_relative_eq!((a - b).norm(), 0.0, epsilon = 1e-15);
        }
    }
}
