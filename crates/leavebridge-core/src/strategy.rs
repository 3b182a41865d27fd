//! Alternative leave-planning strategies.
//!
//! One input set can be planned several ways: spend the whole budget
//! wherever it scores best, front- or back-load the year, or spread one
//! long break per quarter. Results are sorted by plan score so callers can
//! present the best strategy first.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{DateSpan, Quarter};
use crate::holiday::HolidayRecord;
use crate::optimizer::{Optimizer, PlanRequest};
use crate::plan::LeavePlan;

/// How the budget is distributed over the year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Whole budget, whole year
    Balanced,
    /// Half the budget, January through June
    FrontLoaded,
    /// Half the budget, July through December
    BackLoaded,
    /// A quarter of the budget in each calendar quarter
    QuarterlySpread,
}

/// A strategy together with the plan it produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyResult {
    pub kind: StrategyKind,
    pub plan: LeavePlan,
}

/// Generate alternative plans for one request, sorted by score descending.
///
/// The request's window field is ignored; each strategy supplies its own.
/// Windowed sub-plans always run the greedy selector so a shrunken pool
/// cannot pull them into the exact search.
pub fn generate_strategies(
    optimizer: &Optimizer,
    request: &PlanRequest,
    holidays: &[HolidayRecord],
) -> Vec<StrategyResult> {
    let mut results = vec![StrategyResult {
        kind: StrategyKind::Balanced,
        plan: optimizer.optimize(request, holidays),
    }];

    if let Some((first_half, second_half)) = year_halves(request.year) {
        let half_budget = request.budget / 2;

        let front = PlanRequest {
            budget: half_budget,
            window: Some(first_half),
            ..*request
        };
        results.push(StrategyResult {
            kind: StrategyKind::FrontLoaded,
            plan: optimizer.optimize_heuristic(&front, holidays),
        });

        let back = PlanRequest {
            budget: half_budget,
            window: Some(second_half),
            ..*request
        };
        results.push(StrategyResult {
            kind: StrategyKind::BackLoaded,
            plan: optimizer.optimize_heuristic(&back, holidays),
        });
    }

    results.push(StrategyResult {
        kind: StrategyKind::QuarterlySpread,
        plan: quarterly_spread(optimizer, request, holidays),
    });

    results.sort_by(|a, b| b.plan.score.total_cmp(&a.plan.score));
    results
}

/// One optimization per quarter with a quarter of the budget, merged into
/// a single reported plan
fn quarterly_spread(
    optimizer: &Optimizer,
    request: &PlanRequest,
    holidays: &[HolidayRecord],
) -> LeavePlan {
    let per_quarter = request.budget / 4;
    let mut merged: BTreeSet<NaiveDate> = BTreeSet::new();

    for quarter in [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4] {
        let Some(window) = DateSpan::quarter(request.year, quarter) else {
            continue;
        };
        let quarter_request = PlanRequest {
            budget: per_quarter,
            window: Some(window),
            ..*request
        };
        let plan = optimizer.optimize_heuristic(&quarter_request, holidays);
        merged.extend(plan.leave_days);
    }

    optimizer.plan_for_days(request, holidays, &merged)
}

fn year_halves(year: i32) -> Option<(DateSpan, DateSpan)> {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let jun30 = NaiveDate::from_ymd_opt(year, 6, 30)?;
    let jul1 = NaiveDate::from_ymd_opt(year, 7, 1)?;
    let dec31 = NaiveDate::from_ymd_opt(year, 12, 31)?;
    Some((DateSpan::new(jan1, jun30), DateSpan::new(jul1, dec31)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn holidays() -> Vec<HolidayRecord> {
        vec![
            HolidayRecord::new(date(2024, 3, 14), "Spring holiday"),
            HolidayRecord::new(date(2024, 8, 15), "Summer holiday"),
            HolidayRecord::new(date(2024, 12, 25), "Christmas Day"),
        ]
    }

    #[test]
    fn test_all_strategies_produced_and_sorted() {
        let optimizer = Optimizer::new();
        let results = generate_strategies(&optimizer, &PlanRequest::new(2024, 8), &holidays());

        assert_eq!(results.len(), 4);
        for pair in results.windows(2) {
            assert!(pair[0].plan.score >= pair[1].plan.score);
        }
    }

    #[test]
    fn test_budget_split_across_strategies() {
        let optimizer = Optimizer::new();
        let results = generate_strategies(&optimizer, &PlanRequest::new(2024, 8), &holidays());

        for result in &results {
            let cap = match result.kind {
                StrategyKind::Balanced => 8,
                StrategyKind::FrontLoaded | StrategyKind::BackLoaded => 4,
                StrategyKind::QuarterlySpread => 8,
            };
            assert!(result.plan.leave_days.len() as u32 <= cap);
        }
    }

    #[test]
    fn test_front_loaded_stays_in_first_half() {
        let optimizer = Optimizer::new();
        let results = generate_strategies(&optimizer, &PlanRequest::new(2024, 8), &holidays());

        let front = results
            .iter()
            .find(|r| r.kind == StrategyKind::FrontLoaded)
            .unwrap();
        for day in &front.plan.leave_days {
            assert!(*day <= date(2024, 6, 30));
        }
    }

    #[test]
    fn test_tiny_budget_degrades_gracefully() {
        let optimizer = Optimizer::new();
        let results = generate_strategies(&optimizer, &PlanRequest::new(2024, 1), &holidays());

        // Halved and quartered budgets round down to zero
        for result in &results {
            match result.kind {
                StrategyKind::Balanced => assert_eq!(result.plan.leave_days.len(), 1),
                _ => assert!(result.plan.leave_days.is_empty()),
            }
        }
    }
}
