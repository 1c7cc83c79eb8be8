//! Uniprocessor schedulers and KPI evaluation.
//!
//! Provides the three non-preemptive batch policies and schedule quality
//! metrics.
//!
//! # Algorithms
//!
//! - `Fcfs`: dispatch in input order; closed-form prefix sums.
//! - `Spn`: shortest service time among arrived jobs, ties by arrival.
//! - `Hrrn`: highest `(waiting + service) / service` among arrived jobs.
//!
//! `Spn` and `Hrrn` share one tick-driven simulation loop and differ only
//! in the ready pool that picks the next job.
//!
//! # KPI
//!
//! `ScheduleKpi` computes makespan, waiting, turnaround and normalized
//! turnaround.
//!
//! # References
//!
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

mod arrival;
mod fcfs;
mod hrrn;
mod kpi;
mod pool;
mod sim;
mod spn;

pub use arrival::ArrivalFeed;
pub use fcfs::Fcfs;
pub use hrrn::Hrrn;
pub use kpi::ScheduleKpi;
pub use pool::{ReadyPool, RuleScoredPool, ShortestServicePool};
pub use sim::simulate;
pub use spn::Spn;

use std::fmt::Debug;
use tracing::info;

use crate::models::{JobBatch, Policy, Schedule};

/// A batch scheduling policy.
///
/// Implementations are pure: the same batch always yields the same
/// schedule, and the batch is never mutated. Independent runs may share
/// one `&JobBatch` across threads.
pub trait Scheduler: Send + Sync + Debug {
    /// Policy implemented by this scheduler.
    fn policy(&self) -> Policy;

    /// Computes the start time of every job in `batch`.
    fn schedule(&self, batch: &JobBatch) -> Schedule;
}

/// Returns the scheduler implementing `policy`.
pub fn scheduler_for(policy: Policy) -> &'static dyn Scheduler {
    match policy {
        Policy::Fcfs => &Fcfs,
        Policy::Spn => &Spn,
        Policy::Hrrn => &Hrrn,
    }
}

/// Runs each policy independently over the same batch.
///
/// Returns one schedule per policy, in the order given.
pub fn run_policies(batch: &JobBatch, policies: &[Policy]) -> Vec<Schedule> {
    policies
        .iter()
        .map(|&policy| {
            let schedule = scheduler_for(policy).schedule(batch);
            info!(
                %policy,
                jobs = schedule.len(),
                makespan = schedule.makespan(),
                "schedule complete"
            );
            schedule
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules::response_ratio;
    use crate::models::{fixtures, Job, JobId, Ticks};
    use rand::prelude::*;

    fn random_batch(rng: &mut StdRng) -> JobBatch {
        let len = rng.random_range(1..=26);
        let mut id = JobId::FIRST;
        let mut arrival: Ticks = rng.random_range(0..3);
        let mut jobs = Vec::with_capacity(len);
        for i in 0..len {
            if i > 0 {
                id = id.successor().unwrap();
                arrival += rng.random_range(0..6);
            }
            jobs.push(Job::new(id, arrival, rng.random_range(1..10)));
        }
        JobBatch::new(jobs).unwrap()
    }

    #[test]
    fn test_runs_up_to_the_horizon() {
        use crate::validation::MAX_HORIZON as END;

        let batch = fixtures::batch(&[(END - 3, 1), (END - 3, 2)]);
        let schedules = run_policies(&batch, &Policy::ALL);

        assert_eq!(schedules[0].start_times(), vec![0, 1]);
        assert_eq!(schedules[1].start_times(), vec![END - 3, END - 2]);
        assert_eq!(schedules[2].start_times(), vec![END - 3, END - 2]);
        assert_eq!(schedules[1].makespan(), END);

        let kpi = crate::scheduler::ScheduleKpi::calculate(&schedules[0]);
        assert_eq!(kpi.max_waiting, 1 - (END - 3) as i64);
    }

    #[test]
    fn test_scheduler_for_matches_policy() {
        for policy in Policy::ALL {
            assert_eq!(scheduler_for(policy).policy(), policy);
        }
    }

    #[test]
    fn test_run_policies_textbook() {
        let schedules = run_policies(&fixtures::textbook(), &Policy::ALL);
        let starts: Vec<Vec<Ticks>> = schedules.iter().map(Schedule::start_times).collect();
        assert_eq!(
            starts,
            vec![
                vec![0, 3, 9, 13, 18],
                vec![0, 3, 11, 15, 9],
                vec![0, 3, 9, 15, 13],
            ]
        );
    }

    #[test]
    fn test_run_policies_keeps_requested_order() {
        let schedules = run_policies(&fixtures::textbook(), &[Policy::Hrrn, Policy::Fcfs]);
        let policies: Vec<Policy> = schedules.iter().map(|s| s.policy).collect();
        assert_eq!(policies, vec![Policy::Hrrn, Policy::Fcfs]);
    }

    #[test]
    fn test_single_job_starts_at_zero_everywhere() {
        let batch = fixtures::batch(&[(0, 3)]);
        for s in run_policies(&batch, &Policy::ALL) {
            assert_eq!(s.start_times(), vec![0], "{}", s.policy);
        }
    }

    #[test]
    fn test_random_batches_preserve_order_and_dispatch_once() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let batch = random_batch(&mut rng);
            for s in run_policies(&batch, &Policy::ALL) {
                let ids: Vec<JobId> = s.entries.iter().map(|e| e.job_id).collect();
                let input: Vec<JobId> = batch.iter().map(|j| j.id).collect();
                assert_eq!(ids, input, "{}", s.policy);

                let mut dispatched = s.dispatch_order.clone();
                dispatched.sort();
                assert_eq!(dispatched, input, "{}", s.policy);
            }
        }
    }

    #[test]
    fn test_random_batches_fcfs_prefix_sums() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let batch = random_batch(&mut rng);
            let s = Fcfs.schedule(&batch);
            let mut sum = 0;
            for (entry, job) in s.entries.iter().zip(batch.iter()) {
                assert_eq!(entry.start_time, sum);
                sum += job.service_time;
            }
        }
    }

    #[test]
    fn test_random_batches_pool_policies_respect_arrival_and_never_overlap() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..200 {
            let batch = random_batch(&mut rng);
            for s in [Spn.schedule(&batch), Hrrn.schedule(&batch)] {
                for e in &s.entries {
                    assert!(e.start_time >= e.arrival_time, "{} {}", s.policy, e.job_id);
                }

                let mut runs: Vec<(Ticks, Ticks)> = s
                    .entries
                    .iter()
                    .map(|e| (e.start_time, e.completion_time()))
                    .collect();
                runs.sort();
                for pair in runs.windows(2) {
                    assert!(pair[0].1 <= pair[1].0, "{}: overlapping runs", s.policy);
                }
            }
        }
    }

    #[test]
    fn test_random_batches_spn_picks_shortest_ready_job() {
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..200 {
            let batch = random_batch(&mut rng);
            let s = Spn.schedule(&batch);
            for (pos, id) in s.dispatch_order.iter().enumerate() {
                let chosen = s.entry(*id).unwrap();
                // Every job still waiting at that start time must not be shorter,
                // nor equal and earlier in the batch.
                for later in &s.dispatch_order[pos + 1..] {
                    let other = s.entry(*later).unwrap();
                    if other.arrival_time <= chosen.start_time {
                        assert!(
                            (chosen.service_time, chosen.job_id)
                                < (other.service_time, other.job_id)
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_random_batches_hrrn_picks_highest_ratio() {
        let mut rng = StdRng::seed_from_u64(47);
        for _ in 0..200 {
            let batch = random_batch(&mut rng);
            let s = Hrrn.schedule(&batch);
            for (pos, id) in s.dispatch_order.iter().enumerate() {
                let chosen = s.entry(*id).unwrap();
                let clock = chosen.start_time;
                let job = |e: &crate::models::ScheduledJob| {
                    Job::new(e.job_id, e.arrival_time, e.service_time)
                };
                let best = response_ratio(&job(chosen), clock);
                for later in &s.dispatch_order[pos + 1..] {
                    let other = s.entry(*later).unwrap();
                    if other.arrival_time <= clock {
                        assert!(best >= response_ratio(&job(other), clock));
                    }
                }
            }
        }
    }
}
