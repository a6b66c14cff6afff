//! Input validation for inspection scheduling.
//!
//! Checks the raw instance before any model is built. Detects:
//! - Non-positive task durations
//! - Negative horizons
//! - Negative inspection counts
//!
//! All problems are collected and returned together, so a caller sees the
//! full list instead of fixing one error per run.

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A task duration is zero or negative.
    NonPositiveDuration,
    /// The horizon is below zero.
    NegativeHorizon,
    /// The requested number of inspections is below zero.
    NegativeInspectionCount,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the task durations of a single queue.
pub fn validate_queue(durations: &[i64]) -> ValidationResult {
    let mut errors = Vec::new();
    collect_queue_errors(None, durations, &mut errors);
    finish(errors)
}

/// Validates the task durations of every queue.
pub fn validate_durations(durations: &[Vec<i64>]) -> ValidationResult {
    let mut errors = Vec::new();
    for (queue, tasks) in durations.iter().enumerate() {
        collect_queue_errors(Some(queue), tasks, &mut errors);
    }
    finish(errors)
}

/// Validates a complete scheduling request.
///
/// Checks:
/// 1. Every task duration is strictly positive
/// 2. The horizon is non-negative
/// 3. The inspection count is non-negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    durations: &[Vec<i64>],
    inspection_count: i64,
    horizon: i64,
) -> ValidationResult {
    let mut errors = match validate_durations(durations) {
        Ok(()) => Vec::new(),
        Err(errors) => errors,
    };

    if horizon < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeHorizon,
            format!("Horizon must be non-negative, got {horizon}"),
        ));
    }

    if inspection_count < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeInspectionCount,
            format!("Inspection count must be non-negative, got {inspection_count}"),
        ));
    }

    finish(errors)
}

fn collect_queue_errors(queue: Option<usize>, durations: &[i64], errors: &mut Vec<ValidationError>) {
    for (task, &duration) in durations.iter().enumerate() {
        if duration <= 0 {
            let message = match queue {
                Some(q) => format!("Queue {q} task {task} has non-positive duration {duration}"),
                None => format!("Task {task} has non-positive duration {duration}"),
            };
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                message,
            ));
        }
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
