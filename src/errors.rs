//! Shared error types used across submodules.

use std::fmt;

use thiserror::Error;

use crate::circuits::pore::PoreSolveError;
use crate::math::Scalar;

/// Top-level error type for the crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EisError {
    /// Malformed call-time input, detected before any numeric work.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Invalid element definition (reserved combinator name, units/arity mismatch).
    #[error("element definition error: {0}")]
    ElementDefinition(String),
    /// Raised when registering a name that already exists without opting in to overwrite.
    #[error(
        "element {name} already exists. If you want to overwrite the existing element, \
         pass `overwrite = true`."
    )]
    Overwrite {
        /// Name that is already registered.
        name: String,
    },
    /// Raised when a name is not present in the registry.
    #[error("unknown circuit element: {0}")]
    Lookup(String),
    /// The pore-parameter solve found no real solution.
    #[error(transparent)]
    Solver(#[from] PoreSolveError),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EisError>;

/// Which input vector a validation failure refers to.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputVector {
    /// The per-element parameter vector.
    Parameters,
    /// The shared frequency vector.
    Frequencies,
}

impl fmt::Display for InputVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parameters => f.write_str("parameters"),
            Self::Frequencies => f.write_str("frequencies"),
        }
    }
}

/// Call-time input contract violations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The parameter vector length differs from the element's declared arity.
    #[error("in {element}, input list must be length {expected} (got {actual}: {values:?})")]
    Arity {
        /// Element being evaluated.
        element: String,
        /// Declared arity.
        expected: usize,
        /// Supplied length.
        actual: usize,
        /// Supplied parameter values.
        values: Vec<Scalar>,
    },
    /// An entry is not a real number.
    #[error("in {element}, value {value} at index {index} in {vector} {values:?} is not a number")]
    NotANumber {
        /// Element being evaluated.
        element: String,
        /// Vector containing the offending value.
        vector: InputVector,
        /// Position of the offending value.
        index: usize,
        /// The offending value.
        value: Scalar,
        /// Contents of the containing vector.
        values: Vec<Scalar>,
    },
}

impl ValidationError {
    /// Name of the element whose input was rejected.
    #[must_use]
    pub fn element(&self) -> &str {
        match self {
            Self::Arity { element, .. } | Self::NotANumber { element, .. } => element,
        }
    }
}
