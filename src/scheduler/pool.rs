//! Ready pools.
//!
//! A ready pool holds jobs that have arrived but have not been dispatched.
//! Each pool decides which job goes next; the simulation loop that feeds
//! and drains it is shared by every pool-based policy.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::trace;

use crate::dispatching::{select_best, DispatchingRule, SchedulingContext};
use crate::models::{Job, Ticks};

/// Jobs that have arrived but have not been dispatched.
///
/// Jobs are identified by their position in the input batch.
pub trait ReadyPool {
    /// Adds an arrived job.
    fn push(&mut self, index: usize, job: &Job);

    /// Removes and returns the position of the job to dispatch next.
    fn pop_next(&mut self, context: &SchedulingContext) -> Option<usize>;

    /// Number of waiting jobs.
    fn len(&self) -> usize;

    /// Whether no job is waiting.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Min-heap keyed by `(service_time, input position)`.
///
/// The position makes the tie-break explicit: among equal service times
/// the job that arrived first (earlier in the batch) wins.
#[derive(Debug, Default)]
pub struct ShortestServicePool {
    heap: BinaryHeap<Reverse<(Ticks, usize)>>,
}

impl ShortestServicePool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReadyPool for ShortestServicePool {
    fn push(&mut self, index: usize, job: &Job) {
        self.heap.push(Reverse((job.service_time, index)));
    }

    fn pop_next(&mut self, _context: &SchedulingContext) -> Option<usize> {
        self.heap.pop().map(|Reverse((_, index))| index)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Insertion-ordered pool re-scored by a dispatching rule at every decision.
///
/// Used when priorities change with the clock, so no static ordering
/// can be maintained. Equal scores go to the job inserted first.
#[derive(Debug)]
pub struct RuleScoredPool<R> {
    rule: R,
    jobs: Vec<Job>,
    positions: Vec<usize>,
}

impl<R: DispatchingRule> RuleScoredPool<R> {
    /// Creates an empty pool scored by `rule`.
    pub fn new(rule: R) -> Self {
        Self {
            rule,
            jobs: Vec::new(),
            positions: Vec::new(),
        }
    }
}

impl<R: DispatchingRule> ReadyPool for RuleScoredPool<R> {
    fn push(&mut self, index: usize, job: &Job) {
        self.jobs.push(*job);
        self.positions.push(index);
    }

    fn pop_next(&mut self, context: &SchedulingContext) -> Option<usize> {
        let best = select_best(&self.jobs, &self.rule, context)?;
        trace!(
            rule = self.rule.name(),
            clock = context.clock,
            job = %self.jobs[best].id,
            score = self.rule.evaluate(&self.jobs[best], context),
            candidates = self.jobs.len(),
            "rule selection"
        );
        // `remove`, not `swap_remove`: scan order is the tie-break
        self.jobs.remove(best);
        Some(self.positions.remove(best))
    }

    fn len(&self) -> usize {
        self.jobs.len()
    }
}
