//! Validated job batch.

use serde::Serialize;
use std::ops::Deref;

use super::{Job, Ticks};
use crate::validation::{validate_jobs, ValidationError};

/// A non-empty, validated sequence of jobs in input order.
///
/// Guarantees (checked once, at construction):
/// - ids run `A, B, C, ...` without gaps
/// - arrival times are non-decreasing
/// - every service time is positive
/// - latest arrival plus total service time fits in
///   [`MAX_HORIZON`](crate::validation::MAX_HORIZON)
///
/// Schedulers only accept a `JobBatch`, so none of them can start
/// against an unchecked sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobBatch {
    jobs: Vec<Job>,
}

impl JobBatch {
    /// Validates `jobs` and wraps them.
    ///
    /// Returns every detected violation on failure.
    pub fn new(jobs: Vec<Job>) -> Result<Self, Vec<ValidationError>> {
        validate_jobs(&jobs)?;
        Ok(Self { jobs })
    }

    /// Jobs in input order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Total service demand across the batch.
    pub fn total_service_time(&self) -> Ticks {
        self.jobs.iter().map(|j| j.service_time).sum()
    }

}

impl Deref for JobBatch {
    type Target = [Job];

    fn deref(&self) -> &[Job] {
        &self.jobs
    }
}
