//! Non-preemptive single-processor simulation loop.

use tracing::{debug, trace};

use super::arrival::ArrivalFeed;
use super::pool::ReadyPool;
use crate::dispatching::SchedulingContext;
use crate::models::{JobBatch, Policy, Schedule, Ticks};

/// Runs `batch` to completion, letting `pool` pick every dispatch.
///
/// # Algorithm
/// 1. If the pool is empty, move the clock to the next arrival (if it is
///    in the future) and admit everything that has arrived.
/// 2. Pop the pool's choice and record `start = clock`.
/// 3. Advance the clock one tick at a time for the job's service time,
///    admitting arrivals at each tick.
/// 4. Stop once the pool is empty and the feed is exhausted.
///
/// Every job passes through `not arrived → ready → dispatched` exactly
/// once. The run is bounded by total service time plus idle gaps.
pub fn simulate<P: ReadyPool>(policy: Policy, batch: &JobBatch, mut pool: P) -> Schedule {
    let jobs = batch.jobs();
    let mut feed = ArrivalFeed::new(jobs);
    let mut starts: Vec<Ticks> = vec![0; jobs.len()];
    let mut dispatch_order = Vec::with_capacity(jobs.len());
    let mut clock: Ticks = 0;

    loop {
        if pool.is_empty() {
            let Some(next_arrival) = feed.next_arrival() else {
                break;
            };
            if next_arrival > clock {
                trace!(%policy, from = clock, to = next_arrival, "processor idle");
                clock = next_arrival;
            }
            for i in feed.admit(clock) {
                pool.push(i, &jobs[i]);
            }
        }

        let context = SchedulingContext::at_time(clock);
        let Some(current) = pool.pop_next(&context) else {
            break;
        };

        let job = &jobs[current];
        starts[current] = clock;
        dispatch_order.push(current);
        debug!(
            %policy,
            job = %job.id,
            clock,
            service = job.service_time,
            waiting = pool.len(),
            "dispatch"
        );

        // Tick by tick, so arrivals during service are seen at their own tick
        for _ in 0..job.service_time {
            clock += 1;
            for i in feed.admit(clock) {
                pool.push(i, &jobs[i]);
            }
        }
    }

    debug_assert!(feed.is_exhausted(), "{policy}: jobs left in arrival feed");
    debug_assert!(pool.is_empty(), "{policy}: jobs left in ready pool");

    Schedule::from_starts(policy, jobs, &starts, &dispatch_order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;
    use crate::scheduler::pool::ShortestServicePool;

    #[test]
    fn test_idle_gap_moves_clock_to_next_arrival() {
        // B arrives long after A finishes
        let batch = fixtures::batch(&[(0, 2), (10, 3), (11, 1)]);
        let s = simulate(Policy::Spn, &batch, ShortestServicePool::new());
        assert_eq!(s.start_times(), vec![0, 10, 13]);
    }

    #[test]
    fn test_first_arrival_after_zero() {
        let batch = fixtures::batch(&[(4, 2), (5, 1)]);
        let s = simulate(Policy::Spn, &batch, ShortestServicePool::new());
        assert_eq!(s.start_times(), vec![4, 6]);
    }

    #[test]
    fn test_dispatch_order_recorded() {
        let batch = fixtures::batch(&[(0, 5), (1, 3), (1, 1)]);
        let s = simulate(Policy::Spn, &batch, ShortestServicePool::new());
        let order: Vec<char> = s.dispatch_order.iter().map(|id| id.letter()).collect();
        assert_eq!(order, vec!['A', 'C', 'B']);
        assert_eq!(s.start_times(), vec![0, 6, 5]);
    }
}
