pub mod bridges;
pub mod plan;
pub mod strategies;

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use leavebridge_core::{
    error, CoreError, DateSpan, HolidayRecord, Optimizer, PlanRequest, Quarter, ScoringParams,
};

/// Input options shared by the planning commands
#[derive(Args)]
pub struct RequestArgs {
    /// Target year
    #[arg(long)]
    pub year: i32,

    /// Leave-day budget
    #[arg(long)]
    pub budget: u32,

    /// Holidays JSON file (Nager.Date-shaped array)
    #[arg(long)]
    pub holidays: PathBuf,

    /// Priority quarter (q1..q4)
    #[arg(long)]
    pub quarter: Option<Quarter>,

    /// Exclude suggestions before this date (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Scoring parameters TOML file
    #[arg(long)]
    pub params: Option<PathBuf>,
}

impl RequestArgs {
    /// Load holidays and parameters and build the optimizer and request
    pub fn load(&self) -> error::Result<(Optimizer, PlanRequest, Vec<HolidayRecord>)> {
        let text = fs::read_to_string(&self.holidays)?;
        let holidays: Vec<HolidayRecord> = serde_json::from_str(&text)?;

        let params = match &self.params {
            Some(path) => ScoringParams::load(path)?,
            None => ScoringParams::default(),
        };

        let mut request = PlanRequest::new(self.year, self.budget);
        if let Some(quarter) = self.quarter {
            let span = DateSpan::quarter(self.year, quarter).ok_or_else(|| {
                CoreError::Custom(format!("year {} is out of range", self.year))
            })?;
            request = request.with_priority(span);
        }
        if let Some(today) = self.today {
            request = request.with_today(today);
        }

        Ok((Optimizer::with_params(params), request, holidays))
    }
}
