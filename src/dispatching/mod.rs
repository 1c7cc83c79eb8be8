//! Dispatching rules and ready-pool selection.
//!
//! A dispatching rule scores each ready job at a decision point; the
//! selector picks the best-scoring job from a ready pool.
//!
//! # Usage
//!
//! ```
//! use u_batch_schedule::dispatching::{rules, select_best, SchedulingContext};
//! use u_batch_schedule::models::{Job, JobId};
//!
//! let a = Job::new(JobId::new('A').unwrap(), 0, 6);
//! let b = Job::new(JobId::new('B').unwrap(), 0, 2);
//!
//! let ctx = SchedulingContext::at_time(4);
//! assert_eq!(select_best(&[a, b], &rules::ResponseRatio, &ctx), Some(1));
//! ```
//!
//! # References
//!
//! - Stallings (2018), "Operating Systems", Ch. 9.2: Scheduling Algorithms
//! - Brinch Hansen (1971), "Short-term scheduling in multiprogramming systems"

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::select_best;

use crate::models::Job;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = f64;

/// A dispatching rule that evaluates job priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for jobs that should be dispatched first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "HRRN").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a job given the current scheduling context.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, job: &Job, context: &SchedulingContext) -> RuleScore;
}
