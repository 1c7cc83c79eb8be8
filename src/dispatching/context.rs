//! Scheduling context for dispatching rule evaluation.

use crate::models::Ticks;

/// Runtime scheduling state passed to dispatching rules.
///
/// Rules that depend on elapsed time (response ratio) read the simulated
/// clock from here; static rules ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulingContext {
    /// Current simulated time (ticks).
    pub clock: Ticks,
}

impl SchedulingContext {
    /// Creates a context at the given time.
    pub fn at_time(clock: Ticks) -> Self {
        Self { clock }
    }
}
