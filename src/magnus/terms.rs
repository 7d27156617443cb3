// Copyright 2026 SpinDynamics Contributors
// SPDX-License-Identifier: Apache-2.0

//! Truncated Magnus-series terms for a time-sampled Hamiltonian.
//!
//! The Hamiltonian arrives as Hermitian operators sampled at evenly spaced
//! instants, first and last samples being the integration bounds. Each
//! order turns the nested time-ordered integrals of the Magnus series into
//! explicit sums over sample indices: trapezoidal for order one,
//! left-rule triangular sums of (nested) commutators for orders two and
//! three, whose outer index ranges stop before the final sample.
//!
//! Ref: Magnus (1954), Commun. Pure Appl. Math. 7, 649.
//! Ref: Blanes et al. (2009), Phys. Rep. 470, 151.
//!
//! Orders two and three are quadratic and cubic in the sample count, each
//! term costing a (double) commutator; their outer sums are partitioned
//! across threads, the partial sums being reduced by plain matrix
//! addition.

use ndarray::Array2;
use num_complex::Complex64;
use rayon::prelude::*;
use std::f64::consts::PI;

use crate::error::{InvalidInputError, RepresentationError, Result};
use crate::operator::commutator;

/// Validate a Hamiltonian sample: at least the two integration endpoints,
/// every operator square and of one common dimension. Returns that
/// dimension.
fn validate_samples(h: &[Array2<Complex64>]) -> Result<usize> {
    if h.len() < 2 {
        return Err(InvalidInputError::TooFewSamples { actual: h.len() }.into());
    }
    let d = h[0].nrows();
    for sample in h {
        if sample.dim() != (d, d) {
            return Err(RepresentationError::ShapeMismatch {
                expected: (d, d),
                actual: sample.dim(),
            }
            .into());
        }
    }
    Ok(d)
}

/// First-order Magnus term: −i·2π·∫h dt.
///
/// The integral is the trapezoidal rule over the sample range — unit
/// weight on the endpoints, weight two on interior samples, scaled by
/// `time_step/2`.
pub fn first_order_term(h: &[Array2<Complex64>], time_step: f64) -> Result<Array2<Complex64>> {
    validate_samples(h)?;

    let mut integral = h[0].clone();
    for sample in &h[1..h.len() - 1] {
        integral = integral + sample * Complex64::new(2.0, 0.0);
    }
    integral = (integral + &h[h.len() - 1]) * Complex64::new(time_step / 2.0, 0.0);
    Ok(integral * Complex64::new(0.0, -2.0 * PI))
}

/// Second-order Magnus term.
///
/// −½·(2π)²·Σ_{t1} Σ_{t2 ≤ t1} [h(t1), h(t2)]·Δt², the leading correction
/// for non-commutativity of the Hamiltonian with itself at different
/// times.
pub fn second_order_term(h: &[Array2<Complex64>], time_step: f64) -> Result<Array2<Complex64>> {
    let d = validate_samples(h)?;

    let integral = (0..h.len() - 1)
        .into_par_iter()
        .map(|t1| {
            let mut partial = Array2::zeros((d, d));
            for t2 in 0..=t1 {
                partial = partial + commutator(&h[t1], &h[t2]);
            }
            partial
        })
        .reduce(|| Array2::zeros((d, d)), |a, b| a + b);

    let scale = -0.5 * (2.0 * PI).powi(2) * time_step.powi(2);
    Ok(integral * Complex64::new(scale, 0.0))
}

/// Third-order Magnus term.
///
/// (i/6)·(2π)³·Σ_{t1} Σ_{t2 ≤ t1} Σ_{t3 ≤ t2}
/// ([h(t1), [h(t2), h(t3)]] + [h(t3), [h(t2), h(t1)]])·Δt³.
///
/// Cubic in the sample count; the dominant cost of the engine.
pub fn third_order_term(h: &[Array2<Complex64>], time_step: f64) -> Result<Array2<Complex64>> {
    let d = validate_samples(h)?;

    let integral = (0..h.len() - 1)
        .into_par_iter()
        .map(|t1| {
            let mut partial = Array2::zeros((d, d));
            for t2 in 0..=t1 {
                for t3 in 0..=t2 {
                    let nested = commutator(&h[t1], &commutator(&h[t2], &h[t3]))
                        + commutator(&h[t3], &commutator(&h[t2], &h[t1]));
                    partial = partial + nested;
                }
            }
            partial
        })
        .reduce(|| Array2::zeros((d, d)), |a, b| a + b);

    let scale = (2.0 * PI).powi(3) * time_step.powi(3) / 6.0;
    Ok(integral * Complex64::new(0.0, scale))
}
