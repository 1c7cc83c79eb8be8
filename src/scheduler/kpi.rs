//! Schedule quality metrics (KPIs).
//!
//! Computes standard uniprocessor performance indicators from a
//! completed schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Avg Waiting | Mean of start - arrival |
//! | Max Waiting | Largest single wait |
//! | Avg Turnaround | Mean of completion - arrival |
//! | Avg Normalized Turnaround | Mean of turnaround / service |
//!
//! # Reference
//! Stallings (2018), "Operating Systems", Ch. 9.2: Scheduling Criteria

use serde::Serialize;

use crate::models::{Policy, Schedule, ScheduledJob, Ticks};

/// Schedule performance indicators.
///
/// All time values are in ticks. Waiting and turnaround are signed because
/// FCFS may start a job before it arrives.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleKpi {
    /// Policy the schedule was produced by.
    pub policy: Policy,
    /// Latest completion time.
    pub makespan: Ticks,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Longest waiting time of any single job.
    pub max_waiting: i64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean normalized turnaround (turnaround / service).
    pub avg_normalized_turnaround: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let entries = &schedule.entries;

        let avg_waiting = mean(entries.iter().map(|e| e.waiting_time() as f64));
        let max_waiting = entries
            .iter()
            .map(ScheduledJob::waiting_time)
            .max()
            .unwrap_or(0);
        let avg_turnaround = mean(entries.iter().map(|e| e.turnaround_time() as f64));
        let avg_normalized_turnaround = mean(entries.iter().map(ScheduledJob::normalized_turnaround));

        Self {
            policy: schedule.policy,
            makespan: schedule.makespan(),
            avg_waiting,
            max_waiting,
            avg_turnaround,
            avg_normalized_turnaround,
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
