//! Ready-pool selection.

use super::{DispatchingRule, SchedulingContext};
use crate::models::Job;

/// Returns the index of the highest-priority job in `pool`.
///
/// Scans in pool order and keeps the first job whose score is strictly
/// better than everything before it, so equal scores resolve to the
/// earliest position. Returns `None` for an empty pool.
pub fn select_best<R>(pool: &[Job], rule: &R, context: &SchedulingContext) -> Option<usize>
where
    R: DispatchingRule + ?Sized,
{
    let mut best: Option<(usize, f64)> = None;

    for (i, job) in pool.iter().enumerate() {
        let score = rule.evaluate(job, context);
        match best {
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((i, score)),
        }
    }

    best.map(|(i, _)| i)
}
