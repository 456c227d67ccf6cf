//! Error type for contract violations at the engine boundary.
//!
//! Degenerate geometry is not an error; solvers report it with `None`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CogoError {
    #[error("invalid DDD.MMSS angle '{input}': {reason}")]
    InvalidDms { input: String, reason: &'static str },

    #[error("invalid reference direction discriminant: {0}")]
    InvalidReferenceDirection(i64),

    #[error("invalid rotation direction discriminant: {0}")]
    InvalidRotationDirection(i64),

    #[error("invalid number: '{0}'")]
    InvalidNumber(String),
}

pub type Result<T> = std::result::Result<T, CogoError>;
