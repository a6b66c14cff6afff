//! Crate error type.
//!
//! Only malformed input is an error. An exact search that cannot place every
//! inspection is reported through [`SolveStatus`](crate::scheduler::SolveStatus),
//! and the heuristic's rounding fallback is a normal result.

use crate::validation::ValidationError;

/// Errors produced by the inspection schedulers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InspectionError {
    /// Input failed validation. Carries every problem found, not just the first.
    #[error(
        "invalid input: {}",
        .0.iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join("; ")
    )]
    InvalidInput(Vec<ValidationError>),
}

impl From<Vec<ValidationError>> for InspectionError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

impl InspectionError {
    /// Validation errors carried by this error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
        }
    }
}
