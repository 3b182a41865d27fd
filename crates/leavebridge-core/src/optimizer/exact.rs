//! Exhaustive combination search for small problems.
//!
//! Enumerates every subset of exactly `budget` workdays from the pool via
//! include/exclude recursion over the sorted workday list, scores the
//! realized outcome of each complete combination, and keeps the best. Cost
//! is `C(pool, budget)` evaluations, so callers gate this behind the size
//! guard in `ScoringParams`.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::calendar::DateSpan;
use crate::plan::reconstruct_breaks;
use crate::scoring::{plan_score, ScoringParams};

/// Highest-scoring combination seen so far
pub(super) struct BestCombination {
    pub score: f64,
    pub days: Vec<NaiveDate>,
}

/// Search the pool for the best combination of exactly `budget` days.
///
/// Returns `None` only when no complete combination was evaluated, which
/// can only happen on an empty pool; the caller falls back to the greedy
/// path in that case.
pub(super) fn search(
    pool: &[NaiveDate],
    budget: usize,
    free: &BTreeSet<NaiveDate>,
    priority: Option<&DateSpan>,
    params: &ScoringParams,
) -> Option<BestCombination> {
    let mut best = None;
    let mut selection = Vec::with_capacity(budget);
    enumerate(pool, budget, 0, free, priority, params, &mut selection, &mut best);
    best
}

#[allow(clippy::too_many_arguments)]
fn enumerate(
    pool: &[NaiveDate],
    remaining: usize,
    index: usize,
    free: &BTreeSet<NaiveDate>,
    priority: Option<&DateSpan>,
    params: &ScoringParams,
    selection: &mut Vec<NaiveDate>,
    best: &mut Option<BestCombination>,
) {
    if remaining == 0 {
        let leave: BTreeSet<NaiveDate> = selection.iter().copied().collect();
        let breaks = reconstruct_breaks(free, &leave);
        let score = plan_score(&breaks, selection, priority, params);
        // Strictly greater keeps the earliest combination among ties,
        // which makes tie results deterministic
        if best.as_ref().map_or(true, |b| score > b.score) {
            *best = Some(BestCombination {
                score,
                days: selection.clone(),
            });
        }
        return;
    }

    // Not enough days left in the pool to complete the combination
    if pool.len() - index < remaining {
        return;
    }

    selection.push(pool[index]);
    enumerate(pool, remaining - 1, index + 1, free, priority, params, selection, best);
    selection.pop();

    enumerate(pool, remaining, index + 1, free, priority, params, selection, best);
}
