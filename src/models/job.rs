//! Job model.
//!
//! A job is a single non-preemptible unit of CPU work: it arrives at a
//! point on the simulated clock and needs the processor for a fixed
//! number of ticks.
//!
//! # Reference
//! Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

use serde::{Deserialize, Serialize};
use std::fmt;

/// Simulated time, in ticks from t=0.
pub type Ticks = u64;

/// Job identifier: a single uppercase ASCII letter.
///
/// The letter is also the job's position key: `A` is the first job of a
/// batch, `B` the second, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct JobId(char);

impl JobId {
    /// First id of every batch.
    pub const FIRST: JobId = JobId('A');

    /// Creates an id from an uppercase ASCII letter.
    ///
    /// Returns `None` for anything else (lowercase, digits, punctuation).
    pub fn new(letter: char) -> Option<Self> {
        letter.is_ascii_uppercase().then_some(Self(letter))
    }

    /// The underlying letter.
    #[inline]
    pub fn letter(self) -> char {
        self.0
    }

    /// The id that directly follows this one (`A` → `B`), if any.
    pub fn successor(self) -> Option<Self> {
        match self.0 {
            'Z' => None,
            c => Self::new((c as u8 + 1) as char),
        }
    }
}

impl TryFrom<char> for JobId {
    type Error = String;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        Self::new(letter).ok_or_else(|| format!("job id must be an uppercase letter, got '{letter}'"))
    }
}

impl From<JobId> for char {
    fn from(id: JobId) -> Self {
        id.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A job to be dispatched on the single simulated processor.
///
/// Immutable once constructed; schedulers only read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Job identifier.
    pub id: JobId,
    /// Tick at which the job becomes ready.
    pub arrival_time: Ticks,
    /// Ticks of processor time the job needs.
    pub service_time: Ticks,
}

impl Job {
    /// Creates a new job.
    pub fn new(id: JobId, arrival_time: Ticks, service_time: Ticks) -> Self {
        Self {
            id,
            arrival_time,
            service_time,
        }
    }

    /// Waiting time if the job were dispatched at `clock`.
    ///
    /// Zero when `clock` precedes the arrival.
    #[inline]
    pub fn waiting_at(&self, clock: Ticks) -> Ticks {
        clock.saturating_sub(self.arrival_time)
    }
}
