//! Engine error types.
//!
//! [`ValidationError`] (in [`crate::validation`]) is the structured,
//! caller-displayable reason a candidate was rejected. [`EngineError`]
//! wraps it together with the engine's non-validation failures.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A hard-blocking validation failure.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A position does not exist in the collection.
    #[error("index {index} is out of bounds for a collection of {len} activities")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A holiday dataset could not be decoded.
    #[error("invalid holiday dataset: {0}")]
    InvalidDataset(String),

    /// Engine configuration could not be decoded.
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),

    /// An importer record does not have the expected shape.
    #[error("malformed import record: {0}")]
    MalformedRecord(String),
}

impl EngineError {
    /// The validation failure, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}
