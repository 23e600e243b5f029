//! Core capability errors (validation and refusal states).
//!
//! These are bounded and stable: core errors represent domain/refusal
//! states, not library implementation details. "Not found" is never an
//! error here - id-keyed operations return `None` sentinels instead.

use thiserror::Error;

use crate::error::{Effect, Transience};

/// Invalid record identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("todo id `{raw}` is invalid: {reason}")]
pub struct InvalidId {
    pub raw: String,
    pub reason: String,
}

/// Canonical error enum for the core capability.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CoreError {
    #[error(transparent)]
    InvalidId(#[from] InvalidId),

    #[error("validation failed for field {field}: {reason}")]
    ValidationFailed { field: String, reason: String },
}

impl CoreError {
    pub fn transience(&self) -> Transience {
        // Core errors are pure domain/input failures.
        Transience::Permanent
    }

    pub fn effect(&self) -> Effect {
        Effect::None
    }
}
