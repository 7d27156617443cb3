// Copyright 2026 SpinDynamics Contributors
// SPDX-License-Identifier: Apache-2.0

//! Canonical (thermal equilibrium) density matrices.
//!
//! Ref: Levitt, "Spin Dynamics" (2nd ed.), §11.2 — the high-temperature
//! Boltzmann distribution over spin energy levels.

use ndarray::Array2;
use num_complex::Complex64;
use std::f64::consts::PI;

use crate::error::{InvalidInputError, Result};
use crate::linalg::{exp_hermitian, trace};

/// Planck constant, J·s (CODATA exact).
pub const PLANCK: f64 = 6.626_070_15e-34;

/// Boltzmann constant, J/K (CODATA exact).
pub const BOLTZMANN: f64 = 1.380_649e-23;

/// Density matrix of a canonical ensemble at thermal equilibrium.
///
/// Computes `exp(−(h/k_B)·H·2π·1e6 / T)` normalized to unit trace. The
/// Hamiltonian is in MHz; the 2π·1e6 factor restores angular frequency in
/// Hz so the h/k_B ratio is applied in consistent units.
///
/// Fails when `temperature` (kelvin) is not strictly positive.
pub fn canonical_density_matrix(
    hamiltonian: &Array2<Complex64>,
    temperature: f64,
) -> Result<Array2<Complex64>> {
    if !(temperature > 0.0) {
        return Err(InvalidInputError::NonPositiveTemperature {
            kelvin: temperature,
        }
        .into());
    }
    tracing::debug!(temperature, dim = hamiltonian.nrows(), "building canonical density matrix");

    let scale = -(PLANCK / BOLTZMANN) * 2.0 * PI * 1e6 / temperature;
    let numerator = exp_hermitian(hamiltonian, Complex64::new(scale, 0.0));

    // exp of a Hermitian operator is positive definite, so the trace is
    // real and strictly positive.
    let z = trace(&numerator).re;
    Ok(numerator / Complex64::new(z, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::linalg::identity;
    use crate::operator::algebra::{positivity, unit_trace};
    use crate::test_utils::{assert_matrix_close, random_hermitian};
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_rejects_zero_and_negative_temperature() {
        let h = random_hermitian(2, 41);
        for t in [0.0, -1.0, -300.0, f64::NAN] {
            let err = canonical_density_matrix(&h, t).unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)));
        }
    }

    #[test]
    fn test_output_is_physical_state() {
        let h = random_hermitian(4, 42);
        let rho = canonical_density_matrix(&h, 300.0).unwrap();
        assert!(unit_trace(&rho));
        assert!(positivity(&rho));
    }

    #[test]
    fn test_high_temperature_limit_is_maximally_mixed() {
        let h = random_hermitian(4, 43);
        let rho = canonical_density_matrix(&h, 1e6).unwrap();
        let mixed = identity(4) / Complex64::new(4.0, 0.0);
        assert_matrix_close(&rho, &mixed, 1e-8);
    }

    #[test]
    fn test_low_temperature_limit_favors_ground_state() {
        // Two levels split by 10 MHz; far below the level-splitting
        // temperature everything condenses into the lower level.
        let h = array![
            [Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)],
            [Complex64::new(0.0, 0.0), Complex64::new(10.0, 0.0)]
        ];
        let rho = canonical_density_matrix(&h, 1e-6).unwrap();
        assert_relative_eq!(rho[[0, 0]].re, 1.0, epsilon = 1e-9);
        assert_relative_eq!(rho[[1, 1]].re, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_populations_follow_boltzmann_ratio() {
        let nu = 5.0; // MHz
        let h = array![
            [Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)],
            [Complex64::new(0.0, 0.0), Complex64::new(nu, 0.0)]
        ];
        let temperature = 1e-4;
        let rho = canonical_density_matrix(&h, temperature).unwrap();
        let beta = (PLANCK / BOLTZMANN) * 2.0 * PI * 1e6 / temperature;
        let expected_ratio = (-beta * nu).exp();
        let ratio = rho[[1, 1]].re / rho[[0, 0]].re;
        assert_relative_eq!(ratio, expected_ratio, max_relative = 1e-6);
    }
}
