//! Free-day classification over a calendar year.
//!
//! Classifies every date of a year as free (weekend or public holiday) or
//! workday, and provides the quarter/date-span types used to express
//! priority periods. The free-day set and the workday list are an exact
//! partition of the year.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::holiday::HolidayRecord;

/// Check if a date is a Saturday or Sunday
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// All dates from Jan 1 to Dec 31 of a year, in order.
///
/// Returns an empty list for years outside chrono's representable range.
pub fn year_days(year: i32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return Vec::new();
    };
    let Some(last) = NaiveDate::from_ymd_opt(year, 12, 31) else {
        return Vec::new();
    };
    first.iter_days().take_while(|d| *d <= last).collect()
}

/// All free days (weekends and holidays) in a year.
///
/// Holiday dates outside the year are ignored; duplicate holiday dates
/// collapse on set insertion. An empty holiday list is valid and yields
/// weekends only.
pub fn free_days(year: i32, holidays: &[HolidayRecord]) -> BTreeSet<NaiveDate> {
    let holiday_dates: BTreeSet<NaiveDate> = holidays
        .iter()
        .map(|h| h.date)
        .filter(|d| d.year() == year)
        .collect();

    year_days(year)
        .into_iter()
        .filter(|d| is_weekend(*d) || holiday_dates.contains(d))
        .collect()
}

/// All workdays in a year: the complement of the free-day set, sorted.
pub fn workdays(year: i32, free: &BTreeSet<NaiveDate>) -> Vec<NaiveDate> {
    year_days(year)
        .into_iter()
        .filter(|d| !free.contains(d))
        .collect()
}

/// A calendar quarter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    /// Quarter a date falls in
    pub fn of(date: NaiveDate) -> Self {
        match date.month() {
            1..=3 => Self::Q1,
            4..=6 => Self::Q2,
            7..=9 => Self::Q3,
            _ => Self::Q4,
        }
    }

    /// First and last month of the quarter (1-indexed)
    pub fn months(self) -> (u32, u32) {
        match self {
            Self::Q1 => (1, 3),
            Self::Q2 => (4, 6),
            Self::Q3 => (7, 9),
            Self::Q4 => (10, 12),
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Q1 => "q1",
            Self::Q2 => "q2",
            Self::Q3 => "q3",
            Self::Q4 => "q4",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Quarter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "q1" | "1" => Ok(Self::Q1),
            "q2" | "2" => Ok(Self::Q2),
            "q3" | "3" => Ok(Self::Q3),
            "q4" | "4" => Ok(Self::Q4),
            other => Err(format!("unknown quarter '{other}', expected q1..q4")),
        }
    }
}

/// An inclusive calendar date range.
///
/// Used for priority periods (a quarter the user wants their leave nudged
/// toward) and for strategy windows restricting where leave may land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    /// Create a span; start and end are swapped if given out of order
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Span covering a calendar quarter of a year.
    ///
    /// Returns `None` for years outside chrono's representable range.
    pub fn quarter(year: i32, quarter: Quarter) -> Option<Self> {
        let (first_month, last_month) = quarter.months();
        let start = NaiveDate::from_ymd_opt(year, first_month, 1)?;
        let end = if last_month == 12 {
            NaiveDate::from_ymd_opt(year, 12, 31)?
        } else {
            NaiveDate::from_ymd_opt(year, last_month + 1, 1)?.pred_opt()?
        };
        Some(Self { start, end })
    }

    /// Check if a date falls within the span
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
