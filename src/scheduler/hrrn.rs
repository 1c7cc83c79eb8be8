//! Highest-Response-Ratio-Next.

use super::pool::RuleScoredPool;
use super::sim::simulate;
use super::Scheduler;
use crate::dispatching::rules::ResponseRatio;
use crate::models::{JobBatch, Policy, Schedule};

/// Highest-Response-Ratio-Next scheduler.
///
/// Non-preemptive. At each decision every ready job is scored by
/// `(waiting + service) / service` at the current clock and the highest
/// ratio is dispatched. Equal ratios go to the job that entered the ready
/// pool first.
///
/// # Reference
/// Brinch Hansen (1971), "Short-term scheduling in multiprogramming systems"
#[derive(Debug, Clone, Copy, Default)]
pub struct Hrrn;

impl Scheduler for Hrrn {
    fn policy(&self) -> Policy {
        Policy::Hrrn
    }

    fn schedule(&self, batch: &JobBatch) -> Schedule {
        simulate(Policy::Hrrn, batch, RuleScoredPool::new(ResponseRatio))
    }
}
