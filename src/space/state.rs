// Copyright 2026 SpinDynamics Contributors
// SPDX-License-Identifier: Apache-2.0

//! Pure qubit states bound to a space.

use ndarray::{Array1, Array2};
use num_complex::Complex64;

use crate::error::{RepresentationError, Result};

use super::CompositeQubitSpace;

/// A state vector in a (possibly composite) qubit space.
///
/// Immutable once constructed; the density matrix is derived on demand.
#[derive(Debug, Clone)]
pub struct QubitState {
    space: CompositeQubitSpace,
    vector: Array1<Complex64>,
}

impl QubitState {
    /// Bind a state vector to its space.
    ///
    /// The vector length must be exactly the space dimension 2^n.
    pub fn new(space: CompositeQubitSpace, vector: Array1<Complex64>) -> Result<Self> {
        if vector.len() != space.dimension() {
            return Err(RepresentationError::VectorLengthMismatch {
                expected: space.dimension(),
                actual: vector.len(),
            }
            .into());
        }
        Ok(Self { space, vector })
    }

    /// The space this state lives in.
    pub fn space(&self) -> CompositeQubitSpace {
        self.space
    }

    /// Number of tensor factors of the owning space.
    pub fn n(&self) -> usize {
        self.space.n()
    }

    /// The underlying state vector.
    pub fn vector(&self) -> &Array1<Complex64> {
        &self.vector
    }

    /// The rank-one projector |ψ⟩⟨ψ| expressed in the space's ONB ordering.
    ///
    /// Entry (i, j) is ⟨e_i|ψ⟩·⟨ψ|e_j⟩ over the orthonormal basis
    /// enumeration, Hermitian with unit trace for any normalized state.
    pub fn density_matrix(&self) -> Array2<Complex64> {
        let onb = self.space.onb_matrices();
        let dim = onb.len();

        let mut rho = Array2::zeros((dim, dim));
        for i in 0..dim {
            let e_i_psi: Complex64 = onb[i]
                .iter()
                .zip(self.vector.iter())
                .map(|(e, psi)| e.conj() * psi)
                .sum();
            for j in 0..dim {
                let psi_e_j: Complex64 = self
                    .vector
                    .iter()
                    .zip(onb[j].iter())
                    .map(|(psi, e)| psi.conj() * e)
                    .sum();
                rho[[i, j]] = e_i_psi * psi_e_j;
            }
        }
        rho
    }
}
