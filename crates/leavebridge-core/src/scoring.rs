//! Scoring for bridge candidates and complete leave plans.
//!
//! Two scorers back the two selection modes:
//!
//! - Bridge score (heuristic mode): `merged_len / gap_len` rewards bridges
//!   that unlock the most days off per leave day spent, favoring short
//!   gaps between long blocks. A multiplicative bonus applies when the
//!   gap's midpoint falls inside the priority period.
//! - Plan score (exact mode): the realized outcome of one complete
//!   combination -- the sum of reconstructed break durations, plus a flat
//!   per-day bonus for chosen days inside the priority period.
//!
//! The bonus constants are empirical tuning values with no derivation, so
//! they live in [`ScoringParams`] rather than being hard-coded.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::blocks::BridgeCandidate;
use crate::calendar::DateSpan;
use crate::error::ConfigError;
use crate::plan::Break;

/// Tunable scoring parameters and exact-mode size guards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringParams {
    /// Score multiplier for bridges inside the priority period
    pub quarter_bonus: f64,
    /// Flat bonus per chosen leave day inside the priority period
    /// (exact mode)
    pub priority_day_bonus: f64,
    /// Exact search only runs for budgets up to this size
    pub max_exact_budget: u32,
    /// Exact search only runs for workday pools up to this size.
    ///
    /// This is a coarse guard, not a cost bound: a cutoff or window that
    /// shrinks the pool under the limit can still leave C(pool, budget)
    /// in the millions when the budget is near [`Self::max_exact_budget`].
    /// Lower both limits together when tuning for latency.
    pub max_exact_workdays: usize,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            quarter_bonus: 1.5,
            priority_day_bonus: 5.0,
            max_exact_budget: 10,
            max_exact_workdays: 252,
        }
    }
}

impl ScoringParams {
    /// Load parameters from a TOML file; missing keys keep their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::ParseFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Score a single bridge candidate.
///
/// The priority bonus is a soft nudge: a non-priority bridge with much
/// higher intrinsic efficiency can still outrank a priority bridge.
pub fn bridge_score(
    candidate: &BridgeCandidate,
    priority: Option<&DateSpan>,
    params: &ScoringParams,
) -> f64 {
    let mut score = f64::from(candidate.merged_len) / f64::from(candidate.gap_len);
    if let Some(period) = priority {
        if period.contains(candidate.midpoint()) {
            score *= params.quarter_bonus;
        }
    }
    score
}

/// Score the realized outcome of a complete leave-day combination
pub fn plan_score(
    breaks: &[Break],
    leave_days: &[NaiveDate],
    priority: Option<&DateSpan>,
    params: &ScoringParams,
) -> f64 {
    let mut score: f64 = breaks.iter().map(|b| f64::from(b.duration)).sum();
    if let Some(period) = priority {
        let priority_days = leave_days.iter().filter(|d| period.contains(**d)).count();
        score += priority_days as f64 * params.priority_day_bonus;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{bridge_candidates, segment_blocks};
    use crate::calendar::Quarter;
    use std::collections::BTreeSet;
    use std::io::Write;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn single_bridge(free: &[NaiveDate], work: &[NaiveDate]) -> BridgeCandidate {
        let free: BTreeSet<NaiveDate> = free.iter().copied().collect();
        let work: BTreeSet<NaiveDate> = work.iter().copied().collect();
        let mut candidates = bridge_candidates(&segment_blocks(&free), &work);
        assert_eq!(candidates.len(), 1);
        candidates.remove(0)
    }

    #[test]
    fn test_bridge_score_rewards_short_gaps() {
        let params = ScoringParams::default();

        // One-day gap merging 2 + 1 + 2 days
        let short = single_bridge(
            &[
                date(2024, 3, 9),
                date(2024, 3, 10),
                date(2024, 3, 12),
                date(2024, 3, 13),
            ],
            &[date(2024, 3, 11)],
        );
        // Three-day gap merging 2 + 3 + 1 days
        let long = single_bridge(
            &[date(2024, 3, 9), date(2024, 3, 10), date(2024, 3, 14)],
            &[date(2024, 3, 11), date(2024, 3, 12), date(2024, 3, 13)],
        );

        let short_score = bridge_score(&short, None, &params);
        let long_score = bridge_score(&long, None, &params);
        assert_eq!(short_score, 5.0);
        assert_eq!(long_score, 2.0);
        assert!(short_score > long_score);
    }

    #[test]
    fn test_priority_bonus_is_multiplicative() {
        let params = ScoringParams::default();
        let bridge = single_bridge(
            &[date(2024, 3, 14), date(2024, 3, 16), date(2024, 3, 17)],
            &[date(2024, 3, 15)],
        );

        let base = bridge_score(&bridge, None, &params);
        let q1 = DateSpan::quarter(2024, Quarter::Q1).unwrap();
        let boosted = bridge_score(&bridge, Some(&q1), &params);
        assert_eq!(boosted, base * 1.5);

        // Midpoint outside the priority period: no bonus
        let q3 = DateSpan::quarter(2024, Quarter::Q3).unwrap();
        assert_eq!(bridge_score(&bridge, Some(&q3), &params), base);
    }

    #[test]
    fn test_plan_score_sums_durations_and_priority_days() {
        let params = ScoringParams::default();
        let breaks = vec![
            Break {
                start: date(2024, 3, 9),
                end: date(2024, 3, 12),
                duration: 4,
                leave_days_used: 1,
            },
            Break {
                start: date(2024, 8, 3),
                end: date(2024, 8, 4),
                duration: 2,
                leave_days_used: 0,
            },
        ];
        let leave = vec![date(2024, 3, 11)];

        assert_eq!(plan_score(&breaks, &leave, None, &params), 6.0);

        let q1 = DateSpan::quarter(2024, Quarter::Q1).unwrap();
        assert_eq!(plan_score(&breaks, &leave, Some(&q1), &params), 6.0 + 5.0);
    }

    #[test]
    fn test_params_load_partial_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "quarter_bonus = 2.0").unwrap();

        let params = ScoringParams::load(file.path()).unwrap();
        assert_eq!(params.quarter_bonus, 2.0);
        // Unspecified keys keep their defaults
        assert_eq!(params.max_exact_budget, 10);
    }

    #[test]
    fn test_params_load_missing_file() {
        let err = ScoringParams::load(Path::new("/nonexistent/params.toml"));
        assert!(matches!(err, Err(ConfigError::LoadFailed { .. })));
    }
}
