// Copyright 2026 SpinDynamics Contributors
// SPDX-License-Identifier: Apache-2.0

//! Operator algebra for density-matrix dynamics.
//!
//! Diagonalization and exponentiation, commutators, picture changes, free
//! evolution under a static Hamiltonian, physical-state diagnostics and the
//! canonical thermal ensemble. Frequencies are in MHz and times in
//! microseconds throughout; every evolution operator carries the 2π factor
//! converting frequency to angular phase.

pub mod algebra;
pub mod picture;
pub mod thermal;

pub use algebra::{commutator, exp_diagonalize, positivity, unit_trace};
pub use picture::{changed_picture, free_evolution};
pub use thermal::{canonical_density_matrix, BOLTZMANN, PLANCK};
