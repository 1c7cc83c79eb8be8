//! Arrival event feed.
//!
//! Walks a batch in input order and releases jobs into a ready pool as the
//! simulated clock reaches their arrival times. Arrival times are
//! non-decreasing, so the cursor only ever moves forward and each job is
//! released exactly once.

use std::ops::Range;

use crate::models::{Job, Ticks};

/// Cursor over jobs that have not arrived yet.
#[derive(Debug, Clone)]
pub struct ArrivalFeed<'a> {
    jobs: &'a [Job],
    cursor: usize,
}

impl<'a> ArrivalFeed<'a> {
    /// Creates a feed with no job released.
    pub fn new(jobs: &'a [Job]) -> Self {
        Self { jobs, cursor: 0 }
    }

    /// Releases every pending job whose arrival time is `<= clock`.
    ///
    /// Returns the input positions of the released jobs (possibly empty).
    /// Several jobs sharing one arrival tick are all released together,
    /// in input order.
    pub fn admit(&mut self, clock: Ticks) -> Range<usize> {
        let start = self.cursor;
        let arrived = self.jobs[start..]
            .iter()
            .take_while(|job| job.arrival_time <= clock) // Contiguous, since arrivals are sorted
            .count();
        self.cursor += arrived;
        start..self.cursor
    }

    /// Arrival time of the next pending job.
    pub fn next_arrival(&self) -> Option<Ticks> {
        self.jobs.get(self.cursor).map(|job| job.arrival_time)
    }

    /// Whether every job has been released.
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.jobs.len()
    }
}
