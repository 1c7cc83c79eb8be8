//! Batch scheduling domain models.
//!
//! Provides the data types shared by every scheduling policy: the job
//! record, the validated batch it travels in, and the schedule a policy
//! produces.
//!
//! | Type | Role |
//! |------|------|
//! | `Job` | Arrival + service demand of one unit of work |
//! | `JobBatch` | Validated, non-empty job sequence in input order |
//! | `Schedule` | Start time per job, in input order, for one policy |

mod batch;
mod job;
mod schedule;

pub use batch::JobBatch;
pub use job::{Job, JobId, Ticks};
pub use schedule::{Policy, Schedule, ScheduledJob};

#[cfg(test)]
pub(crate) use batch::fixtures;
