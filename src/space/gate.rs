// Copyright 2026 SpinDynamics Contributors
// SPDX-License-Identifier: Apache-2.0

//! Unitary gates on qubit spaces.
//!
//! An n-gate is a unitary operator U: H^n → H^n (Scherer, pg. 169); n = 1
//! gives a unary gate, n = 2 a binary gate. Construction validates both the
//! shape against the space dimension and unitarity, so a live `NGate` is
//! always safe to apply.

use std::sync::LazyLock;

use ndarray::{array, Array2};
use num_complex::Complex64;

use crate::error::{RepresentationError, Result};
use crate::linalg::adjoint;

use super::{CompositeQubitSpace, QubitState};

/// Largest elementwise deviation of U†U from I tolerated by the
/// construction check.
const UNITARITY_TOL: f64 = 1e-9;

/// A unitary quantum gate bound to a qubit space.
#[derive(Debug, Clone)]
pub struct NGate {
    space: CompositeQubitSpace,
    matrix: Array2<Complex64>,
}

impl NGate {
    /// Validate and wrap a gate matrix for the given space.
    ///
    /// The matrix must be (2^n × 2^n) and satisfy U†U = I within
    /// tolerance; either violation is a representation error.
    pub fn new(matrix: Array2<Complex64>, space: CompositeQubitSpace) -> Result<Self> {
        let dim = space.dimension();
        if matrix.dim() != (dim, dim) {
            return Err(RepresentationError::ShapeMismatch {
                expected: (dim, dim),
                actual: matrix.dim(),
            }
            .into());
        }

        let product = adjoint(&matrix).dot(&matrix);
        let mut deviation = 0.0f64;
        for i in 0..dim {
            for j in 0..dim {
                let expected = if i == j {
                    Complex64::new(1.0, 0.0)
                } else {
                    Complex64::new(0.0, 0.0)
                };
                deviation = deviation.max((product[[i, j]] - expected).norm());
            }
        }
        if deviation > UNITARITY_TOL {
            return Err(RepresentationError::NotUnitary { deviation }.into());
        }

        Ok(Self { space, matrix })
    }

    /// The space this gate acts on.
    pub fn space(&self) -> CompositeQubitSpace {
        self.space
    }

    /// Number of tensor factors of the gate's space.
    pub fn n(&self) -> usize {
        self.space.n()
    }

    /// The gate matrix.
    pub fn matrix(&self) -> &Array2<Complex64> {
        &self.matrix
    }

    /// Apply the gate to a state: U|ψ⟩.
    ///
    /// The state must live in a space with the same number of factors;
    /// mismatched dimensions fail loudly instead of producing a
    /// wrong-shaped product.
    pub fn apply(&self, state: &QubitState) -> Result<QubitState> {
        if self.space.n() != state.n() {
            return Err(RepresentationError::SpaceMismatch {
                gate_n: self.space.n(),
                state_n: state.n(),
            }
            .into());
        }
        QubitState::new(state.space(), self.matrix.dot(state.vector()))
    }
}

/// The Hadamard gate on a single qubit.
///
/// Validated once at first use; immutable for the life of the process.
pub static HADAMARD: LazyLock<NGate> = LazyLock::new(|| {
    let f = Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0);
    NGate::new(
        array![[f, f], [f, -f]],
        CompositeQubitSpace { n: 1 },
    )
    .expect("Hadamard matrix is unitary")
});

/// The controlled-NOT gate on a two-qubit composite space.
pub static CNOT: LazyLock<NGate> = LazyLock::new(|| {
    let one = Complex64::new(1.0, 0.0);
    let zero = Complex64::new(0.0, 0.0);
    NGate::new(
        array![
            [one, zero, zero, zero],
            [zero, one, zero, zero],
            [zero, zero, zero, one],
            [zero, zero, one, zero]
        ],
        CompositeQubitSpace { n: 2 },
    )
    .expect("CNOT matrix is unitary")
});
