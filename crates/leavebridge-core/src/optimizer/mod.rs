//! Leave-day optimization engine.
//!
//! This module wires the pipeline together: classify free days, segment
//! free blocks, analyze bridge candidates, select leave days under the
//! budget, and reconstruct the resulting breaks:
//! - Exact mode enumerates whole combinations and scores the realized
//!   outcome -- strictly more accurate, combinatorially expensive, so it
//!   only runs for small budgets and small workday pools
//! - Heuristic mode scores candidate bridges independently and stitches
//!   them greedily -- cheap, locally optimal
//!
//! The engine is pure: same inputs, same plan. No caching across calls.

mod exact;
mod greedy;

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::blocks::{bridge_candidates, segment_blocks, BridgeCandidate, FreeBlock};
use crate::calendar::{self, DateSpan};
use crate::holiday::HolidayRecord;
use crate::plan::{reconstruct_breaks, total_days_off, LeavePlan};
use crate::scoring::{bridge_score, plan_score, ScoringParams};

/// One optimization request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Target year
    pub year: i32,
    /// Leave-day budget; capped to the workday pool before search
    pub budget: u32,
    /// Period whose candidates receive the scoring bonus
    pub priority: Option<DateSpan>,
    /// Cutoff for in-progress years: blocks ending before this date and
    /// bridges whose first leave day precedes it are excluded entirely
    pub today: Option<NaiveDate>,
    /// Restrict leave days to this span (used by strategies)
    pub window: Option<DateSpan>,
}

impl PlanRequest {
    /// Create a request with no priority period, cutoff, or window
    pub fn new(year: i32, budget: u32) -> Self {
        Self {
            year,
            budget,
            priority: None,
            today: None,
            window: None,
        }
    }

    /// Set the priority period
    pub fn with_priority(mut self, priority: DateSpan) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Exclude suggestions before the given date
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Restrict leave days to the given span
    pub fn with_window(mut self, window: DateSpan) -> Self {
        self.window = Some(window);
        self
    }
}

/// A bridge candidate with its computed score, for selection and for
/// explaining why a plan looks the way it does
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredBridge {
    pub score: f64,
    #[serde(flatten)]
    pub candidate: BridgeCandidate,
}

/// The leave-day optimizer
#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    params: ScoringParams,
}

impl Optimizer {
    /// Create an optimizer with default scoring parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an optimizer with custom scoring parameters
    pub fn with_params(params: ScoringParams) -> Self {
        Self { params }
    }

    /// Compute the leave plan for a request.
    ///
    /// Pure and synchronous; never fails for inputs inside the documented
    /// domain. Degenerate inputs (zero budget, no holidays after the
    /// cutoff, fewer than two free blocks) yield the empty plan.
    pub fn optimize(&self, request: &PlanRequest, holidays: &[HolidayRecord]) -> LeavePlan {
        self.run(request, holidays, true)
    }

    /// Compute a plan with the greedy bridge selector regardless of
    /// problem size.
    ///
    /// The strategy generator uses this for its windowed sub-plans, where
    /// a shrunken pool would otherwise pull mid-sized budgets into the
    /// exact search.
    pub fn optimize_heuristic(&self, request: &PlanRequest, holidays: &[HolidayRecord]) -> LeavePlan {
        self.run(request, holidays, false)
    }

    fn run(&self, request: &PlanRequest, holidays: &[HolidayRecord], allow_exact: bool) -> LeavePlan {
        if request.budget == 0 {
            return LeavePlan::empty();
        }
        let holidays = effective_holidays(request, holidays);
        if holidays.is_empty() {
            // Weekends alone never require leave to bridge
            return LeavePlan::empty();
        }

        let free = calendar::free_days(request.year, &holidays);
        let blocks = segment_blocks(&free);
        if blocks.len() < 2 {
            return LeavePlan::empty();
        }

        let workdays: BTreeSet<NaiveDate> =
            calendar::workdays(request.year, &free).into_iter().collect();
        let pool = self.workday_pool(request, &workdays);
        let budget = (request.budget as usize).min(pool.len()) as u32;
        if budget == 0 {
            return LeavePlan::empty();
        }

        if allow_exact
            && budget <= self.params.max_exact_budget
            && pool.len() <= self.params.max_exact_workdays
        {
            if let Some(best) = exact::search(
                &pool,
                budget as usize,
                &free,
                request.priority.as_ref(),
                &self.params,
            ) {
                return self.finish(request, &free, best.days);
            }
            // No combination evaluated: fall through to the greedy path
        }

        let bridges = self.rank_bridges(request, &blocks, &workdays);
        let days = greedy::select(&bridges, budget);
        self.finish(request, &free, days)
    }

    /// Score and rank the bridge candidates a request would consider.
    ///
    /// Exposed so callers can explain a plan: the greedy selector walks
    /// exactly this list.
    pub fn scored_bridges(
        &self,
        request: &PlanRequest,
        holidays: &[HolidayRecord],
    ) -> Vec<ScoredBridge> {
        let holidays = effective_holidays(request, holidays);
        if holidays.is_empty() {
            // Weekends alone never require leave to bridge
            return Vec::new();
        }
        let free = calendar::free_days(request.year, &holidays);
        let blocks = segment_blocks(&free);
        let workdays: BTreeSet<NaiveDate> =
            calendar::workdays(request.year, &free).into_iter().collect();
        self.rank_bridges(request, &blocks, &workdays)
    }

    /// Rebuild a plan's statistics from an explicit set of leave days.
    ///
    /// Used by the strategy generator to merge per-quarter selections into
    /// one reported plan.
    pub fn plan_for_days(
        &self,
        request: &PlanRequest,
        holidays: &[HolidayRecord],
        leave: &BTreeSet<NaiveDate>,
    ) -> LeavePlan {
        let holidays = effective_holidays(request, holidays);
        let free = calendar::free_days(request.year, &holidays);
        self.finish(request, &free, leave.iter().copied().collect())
    }

    fn rank_bridges(
        &self,
        request: &PlanRequest,
        blocks: &[FreeBlock],
        workdays: &BTreeSet<NaiveDate>,
    ) -> Vec<ScoredBridge> {
        let mut scored: Vec<ScoredBridge> = bridge_candidates(blocks, workdays)
            .into_iter()
            .filter(|c| is_allowed(request, c))
            .map(|candidate| ScoredBridge {
                score: bridge_score(&candidate, request.priority.as_ref(), &self.params),
                candidate,
            })
            .collect();

        // Score descending, then cheaper gaps, then earliest start, so
        // equal-scoring candidates resolve deterministically
        scored.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then(a.candidate.gap_len.cmp(&b.candidate.gap_len))
                .then(a.candidate.first_day().cmp(&b.candidate.first_day()))
        });
        scored
    }

    /// Workdays eligible for exact-mode selection under the request's
    /// cutoff and window
    fn workday_pool(&self, request: &PlanRequest, workdays: &BTreeSet<NaiveDate>) -> Vec<NaiveDate> {
        workdays
            .iter()
            .copied()
            .filter(|d| request.today.map_or(true, |today| *d >= today))
            .filter(|d| request.window.map_or(true, |w| w.contains(*d)))
            .collect()
    }

    fn finish(
        &self,
        request: &PlanRequest,
        free: &BTreeSet<NaiveDate>,
        leave: Vec<NaiveDate>,
    ) -> LeavePlan {
        let leave_set: BTreeSet<NaiveDate> = leave.into_iter().collect();
        let leave_days: Vec<NaiveDate> = leave_set.iter().copied().collect();
        let breaks = reconstruct_breaks(free, &leave_set);
        let score = plan_score(&breaks, &leave_days, request.priority.as_ref(), &self.params);
        LeavePlan {
            leave_days,
            total_days_off: total_days_off(&breaks),
            breaks,
            score,
        }
    }
}

/// Holidays still relevant under the request's cutoff
fn effective_holidays(request: &PlanRequest, holidays: &[HolidayRecord]) -> Vec<HolidayRecord> {
    holidays
        .iter()
        .filter(|h| request.today.map_or(true, |today| h.date >= today))
        .cloned()
        .collect()
}

fn is_allowed(request: &PlanRequest, candidate: &BridgeCandidate) -> bool {
    if let Some(today) = request.today {
        // Never recommend leave in the past
        if candidate.block_before.end < today || candidate.first_day() < today {
            return false;
        }
    }
    if let Some(window) = request.window {
        if !candidate.days.iter().all(|d| window.contains(*d)) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Quarter;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn holiday(y: i32, m: u32, d: u32) -> HolidayRecord {
        HolidayRecord::new(date(y, m, d), "Test holiday")
    }

    #[test]
    fn test_single_bridge_prefers_friday() {
        // Thursday holiday: the one-day Friday bridge beats the three-day
        // Monday-Wednesday bridge
        let holidays = vec![holiday(2024, 3, 14)];
        let plan = Optimizer::new().optimize(&PlanRequest::new(2024, 1), &holidays);
        assert_eq!(plan.leave_days, vec![date(2024, 3, 15)]);
    }

    #[test]
    fn test_dual_holiday_takes_all_three_bridges() {
        let holidays = vec![holiday(2024, 3, 12), holiday(2024, 3, 14)];
        let plan = Optimizer::new().optimize(&PlanRequest::new(2024, 3), &holidays);
        assert_eq!(
            plan.leave_days,
            vec![date(2024, 3, 11), date(2024, 3, 13), date(2024, 3, 15)]
        );
        // One nine-day break from Mar 9 through Mar 17
        assert!(plan
            .breaks
            .iter()
            .any(|b| b.start == date(2024, 3, 9) && b.end == date(2024, 3, 17) && b.duration == 9));
    }

    #[test]
    fn test_zero_budget_returns_empty_plan() {
        let holidays = vec![holiday(2024, 3, 14)];
        let plan = Optimizer::new().optimize(&PlanRequest::new(2024, 0), &holidays);
        assert_eq!(plan, LeavePlan::empty());
    }

    #[test]
    fn test_no_holidays_returns_empty_plan() {
        let plan = Optimizer::new().optimize(&PlanRequest::new(2024, 20), &[]);
        assert!(plan.leave_days.is_empty());
    }

    #[test]
    fn test_past_bridges_are_excluded() {
        let holidays = vec![holiday(2024, 3, 12), holiday(2024, 3, 14)];
        let request = PlanRequest::new(2024, 3).with_today(date(2024, 3, 13));
        let plan = Optimizer::new().optimize(&request, &holidays);

        assert!(!plan.leave_days.contains(&date(2024, 3, 11)));
        assert_eq!(plan.leave_days, vec![date(2024, 3, 15)]);
    }

    #[test]
    fn test_budget_capped_to_workday_pool() {
        let holidays = vec![holiday(2024, 3, 14)];
        let plan = Optimizer::new().optimize(&PlanRequest::new(2024, 1000), &holidays);
        // 2024 has 262 weekdays, one of which is the holiday
        assert!(plan.leave_days.len() <= 261);
    }

    #[test]
    fn test_optimize_is_pure() {
        let holidays = vec![holiday(2024, 3, 12), holiday(2024, 5, 1), holiday(2024, 12, 25)];
        let request = PlanRequest::new(2024, 6)
            .with_priority(DateSpan::quarter(2024, Quarter::Q2).unwrap());

        let optimizer = Optimizer::new();
        let first = optimizer.optimize(&request, &holidays);
        let second = optimizer.optimize(&request, &holidays);
        assert_eq!(first, second);
    }

    #[test]
    fn test_exact_mode_picks_best_single_day() {
        // Window shrinks the pool to the three single-day gaps around the
        // two holidays, so the exact search runs
        let holidays = vec![holiday(2024, 3, 12), holiday(2024, 3, 14)];
        let window = DateSpan::new(date(2024, 3, 9), date(2024, 3, 17));
        let request = PlanRequest::new(2024, 1).with_window(window);
        let plan = Optimizer::new().optimize(&request, &holidays);

        // Wednesday joins both holidays into a three-day break, beating
        // the two-day gains of Monday and Friday
        assert_eq!(plan.leave_days, vec![date(2024, 3, 13)]);
    }

    #[test]
    fn test_exact_mode_tie_resolves_to_earliest_combination() {
        let holidays = vec![holiday(2024, 3, 12), holiday(2024, 3, 14)];
        let window = DateSpan::new(date(2024, 3, 9), date(2024, 3, 17));
        let request = PlanRequest::new(2024, 2).with_window(window);
        let plan = Optimizer::new().optimize(&request, &holidays);

        // All pairs from {Mar 11, Mar 13, Mar 15} gain four days; the
        // enumeration order makes the earliest pair win
        assert_eq!(plan.leave_days, vec![date(2024, 3, 11), date(2024, 3, 13)]);
    }

    #[test]
    fn test_exact_mode_priority_day_bonus_changes_winner() {
        let holidays = vec![holiday(2024, 3, 12), holiday(2024, 3, 14)];
        let window = DateSpan::new(date(2024, 3, 9), date(2024, 3, 17));
        let priority = DateSpan::new(date(2024, 3, 15), date(2024, 3, 15));
        let request = PlanRequest::new(2024, 1)
            .with_window(window)
            .with_priority(priority);
        let plan = Optimizer::new().optimize(&request, &holidays);

        // The flat per-day bonus outweighs Wednesday's one-day edge
        assert_eq!(plan.leave_days, vec![date(2024, 3, 15)]);
    }

    #[test]
    fn test_quarter_bonus_nudges_greedy_choice() {
        // Equal-efficiency single-day bridges in Q1 and Q3; budget for one
        let holidays = vec![holiday(2024, 3, 14), holiday(2024, 8, 15)];
        let optimizer = Optimizer::new();

        let plain = PlanRequest::new(2024, 1);
        let plan = optimizer.optimize(&plain, &holidays);
        // Without a priority the tie-break picks the earliest bridge
        assert_eq!(plan.leave_days, vec![date(2024, 3, 15)]);

        let q3 = PlanRequest::new(2024, 1)
            .with_priority(DateSpan::quarter(2024, Quarter::Q3).unwrap());
        let plan = optimizer.optimize(&q3, &holidays);
        assert_eq!(plan.leave_days, vec![date(2024, 8, 16)]);
    }

    #[test]
    fn test_scored_bridges_are_ranked() {
        let holidays = vec![holiday(2024, 3, 14)];
        let bridges = Optimizer::new().scored_bridges(&PlanRequest::new(2024, 1), &holidays);

        assert!(!bridges.is_empty());
        for pair in bridges.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        // The Friday bridge ranks first
        assert_eq!(bridges[0].candidate.days, vec![date(2024, 3, 15)]);
    }

    #[test]
    fn test_scored_bridges_empty_without_holidays() {
        let optimizer = Optimizer::new();
        assert!(optimizer
            .scored_bridges(&PlanRequest::new(2024, 3), &[])
            .is_empty());

        // A cutoff past every holiday degrades to the same case
        let holidays = vec![holiday(2024, 3, 14)];
        let request = PlanRequest::new(2024, 3).with_today(date(2024, 6, 1));
        assert!(optimizer.scored_bridges(&request, &holidays).is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_budget_invariant(
            budget in 0u32..6,
            holiday_ordinals in proptest::collection::btree_set(0u64..366, 0..8)
        ) {
            let jan1 = date(2024, 1, 1);
            let holidays: Vec<HolidayRecord> = holiday_ordinals
                .iter()
                .map(|o| HolidayRecord::new(jan1 + chrono::Days::new(*o), "Test holiday"))
                .collect();

            let plan = Optimizer::new().optimize(&PlanRequest::new(2024, budget), &holidays);
            prop_assert!(plan.leave_days.len() as u32 <= budget);

            // Leave days are sorted and duplicate-free
            for pair in plan.leave_days.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
        }
    }
}
