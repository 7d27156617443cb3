// Copyright 2026 SpinDynamics Contributors
// SPDX-License-Identifier: Apache-2.0

//! Numerical core for finite-dimensional quantum spin dynamics.
//!
//! This crate models qubit spaces and their states and gates, the operator
//! algebra of density-matrix dynamics, and the truncated Magnus expansion
//! used to evolve ensembles under time-dependent Hamiltonians.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               magnus                          │
//! │   series terms · generator · evolve           │
//! ├──────────────────────┬───────────────────────┤
//! │       operator       │        space          │
//! │  exp_diagonalize     │  CompositeQubitSpace  │
//! │  pictures · thermal  │  QubitState · NGate   │
//! ├──────────────────────┴───────────────────────┤
//! │               linalg                          │
//! │   adjoint · eigh (Jacobi) · exp_hermitian     │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Conventions: Hamiltonians in MHz, times in microseconds, complex
//! double precision throughout. All values are immutable after their
//! validating constructor, so they are safe to share across threads.
//!
//! # Modules
//!
//! - [`linalg`]: dense complex matrix kernels
//! - [`space`]: qubit spaces, basis enumeration, states, gates
//! - [`operator`]: diagonalization, picture changes, diagnostics, thermal states
//! - [`magnus`]: truncated Magnus series and evolution
//! - [`error`]: error types

pub mod error;
pub mod linalg;
pub mod magnus;
pub mod operator;
pub mod space;

pub use error::{Error, Result};
pub use magnus::MagnusOrder;
pub use space::{CompositeQubitSpace, NGate, QubitSpace, QubitState, CNOT, HADAMARD};

#[cfg(test)]
pub mod test_utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
