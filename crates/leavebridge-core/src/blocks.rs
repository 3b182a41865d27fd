//! Free-block segmentation and bridge-candidate analysis.
//!
//! A free block is a maximal run of consecutive free days. The workdays
//! strictly between two adjacent blocks form a gap; taking every day of a
//! gap as leave merges both blocks and the gap into one longer block. Each
//! such gap becomes a [`BridgeCandidate`].

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A maximal run of consecutive free days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeBlock {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Length in days, inclusive of both ends
    pub length: u32,
}

impl FreeBlock {
    fn new(start: NaiveDate, end: NaiveDate) -> Self {
        let length = (end - start).num_days() as u32 + 1;
        Self { start, end, length }
    }
}

/// Segment a free-day set into chronologically ordered free blocks.
///
/// Single sorted scan: a new block starts whenever the day difference from
/// the previous free date is not exactly one. An empty set yields an empty
/// list. Produced blocks are non-overlapping and separated by at least one
/// workday.
pub fn segment_blocks(free: &BTreeSet<NaiveDate>) -> Vec<FreeBlock> {
    let mut blocks = Vec::new();
    let mut days = free.iter().copied();
    let Some(first) = days.next() else {
        return blocks;
    };

    let mut start = first;
    let mut end = first;
    for day in days {
        if (day - end).num_days() == 1 {
            end = day;
        } else {
            blocks.push(FreeBlock::new(start, end));
            start = day;
            end = day;
        }
    }
    blocks.push(FreeBlock::new(start, end));

    blocks
}

/// A gap between two adjacent free blocks, bridgeable by taking every
/// workday in it as leave.
///
/// Candidates are built fresh for each optimization run; once any of the
/// gap days has been claimed by an already-committed candidate, the
/// candidate is invalid and must not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeCandidate {
    /// Workdays to take as leave, in order
    pub days: Vec<NaiveDate>,
    /// Number of leave days the bridge costs
    pub gap_len: u32,
    pub block_before: FreeBlock,
    pub block_after: FreeBlock,
    /// Resulting block length if the whole gap is taken as leave
    pub merged_len: u32,
}

impl BridgeCandidate {
    /// Representative date of the gap: its midpoint, rounding down.
    /// For a single-day gap this is the day itself.
    pub fn midpoint(&self) -> NaiveDate {
        self.days[self.days.len() / 2]
    }

    /// First leave day the bridge would require
    pub fn first_day(&self) -> NaiveDate {
        self.days[0]
    }
}

/// Build one bridge candidate per gap between adjacent free blocks.
///
/// Only gaps consisting entirely of workdays are valid bridges. By
/// construction from the free-day set this always holds; the check guards
/// against classification drift between the two inputs.
pub fn bridge_candidates(
    blocks: &[FreeBlock],
    workdays: &BTreeSet<NaiveDate>,
) -> Vec<BridgeCandidate> {
    let mut candidates = Vec::new();

    for pair in blocks.windows(2) {
        let (before, after) = (pair[0], pair[1]);
        let distance = (after.start - before.end).num_days();
        if distance <= 1 {
            // Adjacent blocks cannot occur after segmentation
            continue;
        }

        let days: Vec<NaiveDate> = before
            .end
            .iter_days()
            .skip(1)
            .take((distance - 1) as usize)
            .collect();
        if !days.iter().all(|d| workdays.contains(d)) {
            continue;
        }

        let gap_len = days.len() as u32;
        candidates.push(BridgeCandidate {
            gap_len,
            merged_len: before.length + gap_len + after.length,
            block_before: before,
            block_after: after,
            days,
        });
    }

    candidates
}
