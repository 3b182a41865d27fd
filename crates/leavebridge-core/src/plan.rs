//! Break reconstruction and the caller-facing leave plan.
//!
//! Once leave days are committed, the consecutive-run scan from block
//! segmentation is re-run over the union of free days and leave days. Runs
//! of two or more days are reported as breaks; a singleton free day is not
//! a break.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A reported run of two or more consecutive days off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Break {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Length in days, inclusive of both ends
    pub duration: u32,
    /// Leave days consumed within the run (days that are neither weekend
    /// nor holiday)
    pub leave_days_used: u32,
}

/// The result of one optimization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeavePlan {
    /// Recommended leave dates, sorted and duplicate-free
    pub leave_days: Vec<NaiveDate>,
    /// Resulting consecutive breaks
    pub breaks: Vec<Break>,
    /// Sum of all break durations
    pub total_days_off: u32,
    /// Plan score (see the scoring module)
    pub score: f64,
}

impl LeavePlan {
    /// The empty plan returned for degenerate inputs
    pub fn empty() -> Self {
        Self {
            leave_days: Vec::new(),
            breaks: Vec::new(),
            total_days_off: 0,
            score: 0.0,
        }
    }
}

/// Reconstruct consecutive breaks from the union of free days and
/// committed leave days.
pub fn reconstruct_breaks(
    free: &BTreeSet<NaiveDate>,
    leave: &BTreeSet<NaiveDate>,
) -> Vec<Break> {
    let union: BTreeSet<NaiveDate> = free.union(leave).copied().collect();

    let mut breaks = Vec::new();
    let mut days = union.iter().copied();
    let Some(first) = days.next() else {
        return breaks;
    };

    let mut start = first;
    let mut end = first;
    let mut used = u32::from(leave.contains(&first));
    for day in days {
        if (day - end).num_days() == 1 {
            end = day;
            used += u32::from(leave.contains(&day));
        } else {
            push_run(&mut breaks, start, end, used);
            start = day;
            end = day;
            used = u32::from(leave.contains(&day));
        }
    }
    push_run(&mut breaks, start, end, used);

    breaks
}

fn push_run(breaks: &mut Vec<Break>, start: NaiveDate, end: NaiveDate, used: u32) {
    let duration = (end - start).num_days() as u32 + 1;
    if duration >= 2 {
        breaks.push(Break {
            start,
            end,
            duration,
            leave_days_used: used,
        });
    }
}

/// Total time off: the sum of all break durations
pub fn total_days_off(breaks: &[Break]) -> u32 {
    breaks.iter().map(|b| b.duration).sum()
}
