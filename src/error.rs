// Copyright 2026 SpinDynamics Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for the dynamics core.
//!
//! Two closed failure families cover every fallible operation: matrix
//! representation violations (shape, unitarity, basis indices) and domain
//! constraint violations (temperature, space size, sample length). Errors
//! are raised at the point of violation and never recovered internally.

use std::fmt;

/// Result type alias for dynamics-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed matrix/vector representation
    Representation(RepresentationError),
    /// Domain constraint violated
    InvalidInput(InvalidInputError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Representation(e) => write!(f, "Representation error: {}", e),
            Error::InvalidInput(e) => write!(f, "Invalid input: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Representation(e) => Some(e),
            Error::InvalidInput(e) => Some(e),
        }
    }
}

impl From<RepresentationError> for Error {
    fn from(e: RepresentationError) -> Self {
        Error::Representation(e)
    }
}

impl From<InvalidInputError> for Error {
    fn from(e: InvalidInputError) -> Self {
        Error::InvalidInput(e)
    }
}

/// Violations of the matrix representation contracts.
#[derive(Debug, Clone, PartialEq)]
pub enum RepresentationError {
    /// Matrix shape does not match the qubit-space dimension
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    /// State vector length is not the space dimension
    VectorLengthMismatch { expected: usize, actual: usize },
    /// Matrix fails the unitarity check U†U = I
    NotUnitary { deviation: f64 },
    /// Basis bit outside {0, 1}
    BasisIndexOutOfRange { value: u8 },
    /// Bit-sequence length does not match the number of tensor factors
    BasisLengthMismatch { expected: usize, actual: usize },
    /// Gate and state belong to spaces of different dimension counts
    SpaceMismatch { gate_n: usize, state_n: usize },
    /// State construction called with neither angles nor coefficients
    AmbiguousState,
}

impl fmt::Display for RepresentationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepresentationError::ShapeMismatch { expected, actual } => {
                write!(
                    f,
                    "matrix shape ({} × {}) invalid, expected ({} × {})",
                    actual.0, actual.1, expected.0, expected.1
                )
            }
            RepresentationError::VectorLengthMismatch { expected, actual } => {
                write!(f, "vector length {} invalid, expected {}", actual, expected)
            }
            RepresentationError::NotUnitary { deviation } => {
                write!(f, "matrix is not unitary (‖U†U − I‖ = {:.3e})", deviation)
            }
            RepresentationError::BasisIndexOutOfRange { value } => {
                write!(f, "basis index {} outside {{0, 1}}", value)
            }
            RepresentationError::BasisLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "{} basis indices given for a {}-fold composite space",
                    actual, expected
                )
            }
            RepresentationError::SpaceMismatch { gate_n, state_n } => {
                write!(
                    f,
                    "gate on a {}-qubit space applied to a {}-qubit state",
                    gate_n, state_n
                )
            }
            RepresentationError::AmbiguousState => {
                write!(
                    f,
                    "state must be created from either coefficients or polar and azimuthal angles"
                )
            }
        }
    }
}

impl std::error::Error for RepresentationError {}

/// Violations of domain constraints on inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    /// Temperature of a canonical ensemble must be positive
    NonPositiveTemperature { kelvin: f64 },
    /// Composite space needs at least one tensor factor
    InvalidSpaceSize { n: usize },
    /// Normalization of a zero (or non-finite) vector
    ZeroNorm,
    /// Magnus sample needs at least the two integration endpoints
    TooFewSamples { actual: usize },
}

impl fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInputError::NonPositiveTemperature { kelvin } => {
                write!(f, "temperature must be positive, got {} K", kelvin)
            }
            InvalidInputError::InvalidSpaceSize { n } => {
                write!(f, "invalid qubit space composition: {}", n)
            }
            InvalidInputError::ZeroNorm => {
                write!(f, "cannot normalize a vector with zero norm")
            }
            InvalidInputError::TooFewSamples { actual } => {
                write!(
                    f,
                    "time-dependent Hamiltonian needs at least 2 samples, got {}",
                    actual
                )
            }
        }
    }
}

impl std::error::Error for InvalidInputError {}
