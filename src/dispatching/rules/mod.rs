//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for higher priority jobs.

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::{Job, Ticks};

/// Response ratio of `job` if dispatched at `clock`.
///
/// `R = (w + s) / s` with `w` the time spent waiting since arrival and `s`
/// the service time. Computed in floating point: integer division would
/// truncate every ratio with `w < s` down to 1.
///
/// Always ≥ 1.0, and strictly increasing in `clock` once the job has arrived.
pub fn response_ratio(job: &Job, clock: Ticks) -> f64 {
    let waiting = job.waiting_at(clock) as f64;
    let service = job.service_time as f64;
    (waiting + service) / service
}

/// Highest Response Ratio Next.
///
/// Prioritizes jobs whose normalized turnaround so far is largest. Short
/// jobs rise quickly; long jobs still age upward, so nothing starves.
///
/// # Reference
/// Brinch Hansen (1971), "Short-term scheduling in multiprogramming systems"
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseRatio;

impl DispatchingRule for ResponseRatio {
    fn name(&self) -> &'static str {
        "HRRN"
    }

    fn evaluate(&self, job: &Job, context: &SchedulingContext) -> RuleScore {
        -response_ratio(job, context.clock) // Higher ratio = higher priority → negate
    }
}
