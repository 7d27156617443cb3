// Copyright 2026 SpinDynamics Contributors
// SPDX-License-Identifier: Apache-2.0

//! Qubit spaces and their computational bases.
//!
//! A [`CompositeQubitSpace`] is the n-fold tensor product of two-level
//! systems, identified solely by its factor count; a [`QubitSpace`] is the
//! canonical single-factor instance with cached |0⟩ and |1⟩ kets and a fixed
//! Pauli-Z observable. Basis kets are indexed by bit sequences read
//! most-significant-bit first, so |010⟩ sits at position 2 of the
//! computational basis.
//!
//! Ref: Scherer, "Mathematics of Quantum Computing" (2019), §2.3, §3.2.

pub mod gate;
pub mod state;

use ndarray::{array, Array1, Array2};
use num_complex::Complex64;

use crate::error::{InvalidInputError, RepresentationError, Result};
use crate::linalg::normalize;

pub use gate::{NGate, CNOT, HADAMARD};
pub use state::QubitState;

/// An n-fold tensor product of qubit spaces.
///
/// Owns no state beyond the factor count; equality is structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeQubitSpace {
    n: usize,
}

impl CompositeQubitSpace {
    /// Create a composite space of `n` tensor factors.
    ///
    /// `n = 0` is not a qubit space and is rejected.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(InvalidInputError::InvalidSpaceSize { n }.into());
        }
        Ok(Self { n })
    }

    /// Number of tensor factors.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Hilbert-space dimension, 2^n.
    pub fn dimension(&self) -> usize {
        1 << self.n
    }

    /// Matrix representation of the basis ket for the given bit sequence.
    ///
    /// `[0, 1, 0]` produces |010⟩: the bit sequence is reversed and
    /// accumulated as a binary number (`i += bit · 2^k` over the reversed
    /// positions), which reads the original sequence most-significant-bit
    /// first.
    pub fn basis_from_indices(&self, indices: &[u8]) -> Result<Array1<Complex64>> {
        for &bit in indices {
            if bit > 1 {
                return Err(RepresentationError::BasisIndexOutOfRange { value: bit }.into());
            }
        }
        if indices.len() != self.n {
            return Err(RepresentationError::BasisLengthMismatch {
                expected: self.n,
                actual: indices.len(),
            }
            .into());
        }

        let mut position = 0usize;
        for (k, &bit) in indices.iter().rev().enumerate() {
            position += (bit as usize) << k;
        }
        Ok(basis_at(self.dimension(), position))
    }

    /// The full orthonormal computational basis, in index order.
    ///
    /// Enumerates positions 0..2^n directly; position i carries the ket
    /// whose MSB-first bit string is the binary expansion of i, so the
    /// ordering agrees with [`Self::basis_from_indices`] by construction.
    pub fn onb_matrices(&self) -> Vec<Array1<Complex64>> {
        let dim = self.dimension();
        (0..dim).map(|position| basis_at(dim, position)).collect()
    }
}

/// Unit column vector of length `dim` with a 1 at `position`.
fn basis_at(dim: usize, position: usize) -> Array1<Complex64> {
    let mut ket = Array1::zeros(dim);
    ket[position] = Complex64::new(1.0, 0.0);
    ket
}

/// The canonical single-qubit space.
///
/// A two-dimensional Hilbert space with eigenbasis |0⟩, |1⟩ and the
/// observable A with A|0⟩ = |0⟩ and A|1⟩ = −|1⟩.
#[derive(Debug, Clone)]
pub struct QubitSpace {
    space: CompositeQubitSpace,
    base_zero: Array1<Complex64>,
    base_one: Array1<Complex64>,
    observable: Array2<Complex64>,
}

impl QubitSpace {
    pub fn new() -> Self {
        let space = CompositeQubitSpace { n: 1 };
        Self {
            space,
            base_zero: basis_at(2, 0),
            base_one: basis_at(2, 1),
            observable: array![
                [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                [Complex64::new(0.0, 0.0), Complex64::new(-1.0, 0.0)]
            ],
        }
    }

    /// Number of tensor factors (always 1).
    pub fn n(&self) -> usize {
        self.space.n()
    }

    /// The underlying composite-space value.
    pub fn composite(&self) -> CompositeQubitSpace {
        self.space
    }

    /// The defining observable of the eigenbasis (Pauli Z).
    pub fn observable(&self) -> &Array2<Complex64> {
        &self.observable
    }

    pub fn basis_from_indices(&self, indices: &[u8]) -> Result<Array1<Complex64>> {
        self.space.basis_from_indices(indices)
    }

    pub fn onb_matrices(&self) -> Vec<Array1<Complex64>> {
        self.space.onb_matrices()
    }

    /// Build a pure state of this qubit.
    ///
    /// Angles take priority: with polar angle `beta` and azimuthal angle
    /// `alpha` the state is cos(β/2)|0⟩ + sin(β/2)·e^{iα}|1⟩. Otherwise
    /// `coeffs` is L2-normalized into coeffs[0]|0⟩ + coeffs[1]|1⟩. With
    /// neither, there is no way to determine the state and construction
    /// fails.
    pub fn make_state(
        &self,
        alpha: Option<f64>,
        beta: Option<f64>,
        coeffs: Option<[Complex64; 2]>,
    ) -> Result<QubitState> {
        if let (Some(alpha), Some(beta)) = (alpha, beta) {
            let c0 = Complex64::new((beta / 2.0).cos(), 0.0);
            let c1 = Complex64::new(0.0, alpha).exp() * (beta / 2.0).sin();
            let vector = &self.base_zero * c0 + &self.base_one * c1;
            return QubitState::new(self.space, vector);
        }

        if let Some(coeffs) = coeffs {
            let normalized = normalize(&array![coeffs[0], coeffs[1]])?;
            let vector = &self.base_zero * normalized[0] + &self.base_one * normalized[1];
            return QubitState::new(self.space, vector);
        }

        Err(RepresentationError::AmbiguousState.into())
    }
}

impl Default for QubitSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq<CompositeQubitSpace> for QubitSpace {
    fn eq(&self, other: &CompositeQubitSpace) -> bool {
        self.space == *other
    }
}
