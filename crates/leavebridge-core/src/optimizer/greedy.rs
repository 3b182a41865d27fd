//! Greedy best-first bridge selection for large problems.
//!
//! Walks the score-sorted candidate list once and commits every bridge
//! that is affordable and whose days are still unclaimed. Non-backtracking
//! by design: a skipped bridge is never revisited, so the result is a
//! local optimum traded for tractability.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::ScoredBridge;

/// Select bridge days under the budget, highest score first.
///
/// Returns the committed leave dates in chronological order.
pub(super) fn select(bridges: &[ScoredBridge], budget: u32) -> Vec<NaiveDate> {
    let mut claimed: BTreeSet<NaiveDate> = BTreeSet::new();
    let mut remaining = budget;

    for bridge in bridges {
        if remaining == 0 {
            break;
        }
        let candidate = &bridge.candidate;
        if candidate.gap_len > remaining {
            continue;
        }
        // A day may already belong to a previously committed bridge
        if candidate.days.iter().any(|d| claimed.contains(d)) {
            continue;
        }

        claimed.extend(candidate.days.iter().copied());
        remaining -= candidate.gap_len;
    }

    claimed.into_iter().collect()
}
