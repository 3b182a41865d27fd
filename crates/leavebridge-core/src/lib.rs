//! # Leavebridge Core Library
//!
//! This library computes which workdays of a year are worth taking as paid
//! leave so that leave, weekends, and public holidays combine into the
//! longest and most efficient consecutive breaks. The engine is a pure
//! function: holiday retrieval, rendering, and persistence belong to the
//! caller.
//!
//! ## Pipeline
//!
//! - **Classifier**: every date of the year is free (weekend or holiday)
//!   or a workday
//! - **Segmenter**: free days group into maximal consecutive blocks
//! - **Bridge analyzer**: the workday gap between two adjacent blocks is a
//!   candidate bridge; taking all of it as leave merges the blocks
//! - **Selector**: exact combination search for small problems, greedy
//!   best-first bridge selection for large ones
//! - **Reconstructor**: committed leave days are folded back into the
//!   calendar to report the resulting breaks and totals
//!
//! ## Key Components
//!
//! - [`Optimizer`]: the engine entry point
//! - [`PlanRequest`]: year, budget, priority period, cutoff
//! - [`LeavePlan`]: recommended dates, breaks, and statistics
//! - [`ScoringParams`]: tunable scoring constants and size guards

pub mod blocks;
pub mod calendar;
pub mod error;
pub mod holiday;
pub mod optimizer;
pub mod plan;
pub mod scoring;
pub mod strategy;

pub use blocks::{BridgeCandidate, FreeBlock};
pub use calendar::{DateSpan, Quarter};
pub use error::{ConfigError, CoreError};
pub use holiday::HolidayRecord;
pub use optimizer::{Optimizer, PlanRequest, ScoredBridge};
pub use plan::{Break, LeavePlan};
pub use scoring::ScoringParams;
pub use strategy::{generate_strategies, StrategyKind, StrategyResult};
