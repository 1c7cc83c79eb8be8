//! First-Come-First-Served.

use tracing::debug;

use super::Scheduler;
use crate::models::{JobBatch, Policy, Schedule, Ticks};

/// First-Come-First-Served scheduler.
///
/// Dispatches strictly in input order: each job starts when all jobs before
/// it have consumed their service time. Arrival times are not consulted;
/// the batch order already is the arrival order, and idle gaps are not
/// modelled.
///
/// `start[i] = service[0] + ... + service[i - 1]`. O(n).
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn policy(&self) -> Policy {
        Policy::Fcfs
    }

    fn schedule(&self, batch: &JobBatch) -> Schedule {
        let mut clock: Ticks = 0;
        let starts: Vec<Ticks> = batch
            .iter()
            .map(|job| {
                let start = clock;
                clock += job.service_time;
                debug!(policy = %Policy::Fcfs, job = %job.id, clock = start, "dispatch");
                start
            })
            .collect();
        let order: Vec<usize> = (0..batch.len()).collect();

        Schedule::from_starts(Policy::Fcfs, batch, &starts, &order)
    }
}
