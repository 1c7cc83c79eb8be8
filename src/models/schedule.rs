//! Schedule (result) model.
//!
//! A schedule records, for one scheduling policy, the tick at which each
//! job of a batch was dispatched. Entries always follow the batch's input
//! order; the order in which the simulation actually dispatched jobs is
//! kept separately.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Job, JobId, Ticks};

/// Scheduling discipline that produced a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Process-Next.
    Spn,
    /// Highest-Response-Ratio-Next.
    Hrrn,
}

impl Policy {
    /// All policies, in report column order.
    pub const ALL: [Policy; 3] = [Policy::Fcfs, Policy::Spn, Policy::Hrrn];

    /// Short uppercase name (e.g., "SPN").
    pub fn name(self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Spn => "SPN",
            Policy::Hrrn => "HRRN",
        }
    }

    /// Long description.
    pub fn description(self) -> &'static str {
        match self {
            Policy::Fcfs => "First-Come-First-Served",
            Policy::Spn => "Shortest-Process-Next",
            Policy::Hrrn => "Highest-Response-Ratio-Next",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One job's placement in a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduledJob {
    /// Job identifier.
    pub job_id: JobId,
    /// Arrival time (copied from the job).
    pub arrival_time: Ticks,
    /// Service time (copied from the job).
    pub service_time: Ticks,
    /// Dispatch tick.
    pub start_time: Ticks,
}

impl ScheduledJob {
    fn new(job: &Job, start_time: Ticks) -> Self {
        Self {
            job_id: job.id,
            arrival_time: job.arrival_time,
            service_time: job.service_time,
            start_time,
        }
    }

    /// Tick at which the job finishes.
    #[inline]
    pub fn completion_time(&self) -> Ticks {
        self.start_time + self.service_time
    }

    /// Start minus arrival.
    ///
    /// Negative only under FCFS, which ignores arrival times.
    #[inline]
    pub fn waiting_time(&self) -> i64 {
        self.start_time as i64 - self.arrival_time as i64
    }

    /// Completion minus arrival.
    #[inline]
    pub fn turnaround_time(&self) -> i64 {
        self.completion_time() as i64 - self.arrival_time as i64
    }

    /// Turnaround divided by service time (1.0 = never waited).
    pub fn normalized_turnaround(&self) -> f64 {
        self.turnaround_time() as f64 / self.service_time as f64
    }
}

/// Result of running one policy over a job batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    /// Policy that produced this schedule.
    pub policy: Policy,
    /// One entry per input job, in input order.
    pub entries: Vec<ScheduledJob>,
    /// Job ids in the order they were dispatched.
    pub dispatch_order: Vec<JobId>,
}

impl Schedule {
    /// Builds a schedule from start times indexed by input position.
    ///
    /// `starts[i]` is the start time of `jobs[i]`; `dispatch_order` lists
    /// input positions in dispatch order.
    pub(crate) fn from_starts(
        policy: Policy,
        jobs: &[Job],
        starts: &[Ticks],
        dispatch_order: &[usize],
    ) -> Self {
        debug_assert_eq!(jobs.len(), starts.len(), "one start time per job");
        debug_assert_eq!(jobs.len(), dispatch_order.len(), "every job dispatched once");

        Self {
            policy,
            entries: jobs
                .iter()
                .zip(starts)
                .map(|(job, &start)| ScheduledJob::new(job, start))
                .collect(),
            dispatch_order: dispatch_order.iter().map(|&i| jobs[i].id).collect(),
        }
    }

    /// Start times in input order.
    pub fn start_times(&self) -> Vec<Ticks> {
        self.entries.iter().map(|e| e.start_time).collect()
    }

    /// `(job_id, start_time)` pairs in input order.
    pub fn pairs(&self) -> impl Iterator<Item = (JobId, Ticks)> + '_ {
        self.entries.iter().map(|e| (e.job_id, e.start_time))
    }

    /// Start time of a given job.
    pub fn start_of(&self, job_id: JobId) -> Option<Ticks> {
        self.entry(job_id).map(|e| e.start_time)
    }

    /// Entry for a given job.
    pub fn entry(&self, job_id: JobId) -> Option<&ScheduledJob> {
        self.entries.iter().find(|e| e.job_id == job_id)
    }

    /// Makespan: latest completion time.
    pub fn makespan(&self) -> Ticks {
        self.entries
            .iter()
            .map(ScheduledJob::completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Number of scheduled jobs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
