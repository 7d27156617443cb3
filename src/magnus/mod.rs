// Copyright 2026 SpinDynamics Contributors
// SPDX-License-Identifier: Apache-2.0

//! Magnus-expansion engine for time-dependent Hamiltonians.
//!
//! Approximates the generator Ω(t) of the evolution U(t) = exp(Ω(t)) for a
//! Hamiltonian known at evenly spaced instants, by the truncated series
//!
//!   Ω ≈ Ω₁ + Ω₂ + Ω₃
//!
//! whose terms are nested time-ordered integrals of commutators of the
//! Hamiltonian with itself at different times. Each order is available on
//! its own for cheaper, lower-fidelity approximations; [`generator`] sums
//! them up to a requested order and [`evolve`] conjugates a density matrix
//! by the exponentiated result.
//!
//! # Example
//!
//! ```ignore
//! use spin_dynamics::magnus::{evolve, MagnusOrder};
//!
//! // Hamiltonian samples across the pulse, MHz, spaced by dt microseconds
//! let evolved = evolve(&rho, &samples, dt, MagnusOrder::Second)?;
//! ```
//!
//! Ref: Magnus (1954), Commun. Pure Appl. Math. 7, 649.
//! Ref: Blanes, Casas, Oteo, Ros (2009), Phys. Rep. 470, 151.

pub mod terms;

use ndarray::Array2;
use num_complex::Complex64;

use crate::error::{RepresentationError, Result};
use crate::linalg::{adjoint, exp_hermitian, hermitize};

pub use terms::{first_order_term, second_order_term, third_order_term};

/// Truncation order of the Magnus series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagnusOrder {
    /// Trapezoidal time integral only
    First,
    /// Adds the leading commutator correction
    Second,
    /// Adds the nested double-commutator correction
    Third,
}

/// Truncated Magnus generator for the sampled Hamiltonian, summing the
/// series terms up to `order`.
pub fn generator(
    h: &[Array2<Complex64>],
    time_step: f64,
    order: MagnusOrder,
) -> Result<Array2<Complex64>> {
    tracing::debug!(samples = h.len(), ?order, time_step, "assembling magnus generator");

    let mut omega = first_order_term(h, time_step)?;
    if matches!(order, MagnusOrder::Second | MagnusOrder::Third) {
        omega = omega + second_order_term(h, time_step)?;
    }
    if matches!(order, MagnusOrder::Third) {
        omega = omega + third_order_term(h, time_step)?;
    }
    Ok(omega)
}

/// Evolve a density matrix under the sampled Hamiltonian:
/// ρ ↦ exp(Ω)·ρ·exp(Ω)†.
///
/// The generator is anti-Hermitian (every series term is), so the
/// evolution is exponentiated through the Hermitian operator i·Ω and is
/// unitary by construction.
pub fn evolve(
    rho: &Array2<Complex64>,
    h: &[Array2<Complex64>],
    time_step: f64,
    order: MagnusOrder,
) -> Result<Array2<Complex64>> {
    let omega = generator(h, time_step, order)?;
    let d = omega.nrows();
    if rho.dim() != (d, d) {
        return Err(RepresentationError::ShapeMismatch {
            expected: (d, d),
            actual: rho.dim(),
        }
        .into());
    }

    // exp(Ω) = exp(−i·K) with K = i·Ω Hermitian; hermitize scrubs the
    // rounding residue before diagonalization.
    let k = hermitize(&(&omega * Complex64::new(0.0, 1.0)));
    let u = exp_hermitian(&k, Complex64::new(0.0, -1.0));
    Ok(u.dot(rho).dot(&adjoint(&u)))
}
