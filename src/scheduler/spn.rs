//! Shortest-Process-Next.

use super::pool::ShortestServicePool;
use super::sim::simulate;
use super::Scheduler;
use crate::models::{JobBatch, Policy, Schedule};

/// Shortest-Process-Next scheduler.
///
/// Non-preemptive. At each decision the ready job with the least service
/// time is dispatched; equal service times go to the job that arrived
/// first (earlier in the batch).
///
/// # Reference
/// Stallings (2018), "Operating Systems", Ch. 9.2
#[derive(Debug, Clone, Copy, Default)]
pub struct Spn;

impl Scheduler for Spn {
    fn policy(&self) -> Policy {
        Policy::Spn
    }

    fn schedule(&self, batch: &JobBatch) -> Schedule {
        simulate(Policy::Spn, batch, ShortestServicePool::new())
    }
}
