//! Input validation for job batches.
//!
//! Checks structural integrity of a job sequence before any scheduler
//! runs. Detects:
//! - Empty input
//! - Zero service times
//! - A first job not named `A`
//! - Ids that do not continue the alphabetic run (`A, B, C, ...`)
//! - Arrival times that go backwards
//! - Batches whose timeline would not fit in [`MAX_HORIZON`] ticks
//!
//! Malformed ids (lowercase, digits) cannot reach this stage: [`JobId`]
//! rejects them at parse time and reports [`ValidationErrorKind::MalformedRecord`].
//!
//! [`JobId`]: crate::models::JobId

use serde::Serialize;
use std::fmt;

use crate::models::{Job, JobId, Ticks};

/// Latest tick a validated batch can reach.
///
/// Bounds the last arrival plus the total service time, so clock arithmetic
/// never overflows and signed waiting/turnaround times are exact.
pub const MAX_HORIZON: Ticks = i64::MAX as Ticks;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationErrorKind {
    /// No jobs were supplied.
    MissingInput,
    /// A record is not `<UPPERCASE LETTER> <arrival> <positive service>`.
    MalformedRecord,
    /// The first job is not named `A`.
    FirstJobNotA,
    /// A job id does not directly follow its predecessor's id.
    IdsOutOfOrder,
    /// A job arrives before its predecessor.
    ArrivalTimesOutOfOrder,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Validates a job sequence.
///
/// Checks:
/// 1. At least one job
/// 2. Every service time is positive
/// 3. The first job is `A`
/// 4. Each following id is the successor of the previous one
/// 5. Arrival times are non-decreasing
/// 6. Latest arrival plus total service time stays within [`MAX_HORIZON`]
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_jobs(jobs: &[Job]) -> ValidationResult {
    let Some(first) = jobs.first() else {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::MissingInput,
            "No jobs to schedule",
        )]);
    };

    let mut errors = Vec::new();

    if first.id != JobId::FIRST {
        errors.push(ValidationError::new(
            ValidationErrorKind::FirstJobNotA,
            format!("First job is '{}', expected 'A'", first.id),
        ));
    }

    for job in jobs {
        if job.service_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedRecord,
                format!("Job '{}' has zero service time", job.id),
            ));
        }
    }

    for pair in jobs.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);

        if prev.id.successor() != Some(next.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::IdsOutOfOrder,
                format!("Job '{}' follows '{}'", next.id, prev.id),
            ));
        }

        if next.arrival_time < prev.arrival_time {
            errors.push(ValidationError::new(
                ValidationErrorKind::ArrivalTimesOutOfOrder,
                format!(
                    "Job '{}' arrives at {} before job '{}' at {}",
                    next.id, next.arrival_time, prev.id, prev.arrival_time
                ),
            ));
        }
    }

    let latest_arrival = jobs.iter().map(|j| j.arrival_time).max().unwrap_or(0);
    let horizon = jobs
        .iter()
        .try_fold(latest_arrival, |clock, job| clock.checked_add(job.service_time));
    if !matches!(horizon, Some(end) if end <= MAX_HORIZON) {
        errors.push(ValidationError::new(
            ValidationErrorKind::MalformedRecord,
            format!(
                "Latest arrival {latest_arrival} plus total service time exceeds {MAX_HORIZON} ticks"
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
