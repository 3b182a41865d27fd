use clap::Args;
use leavebridge_core::{generate_strategies, StrategyKind};

use super::RequestArgs;

#[derive(Args)]
pub struct StrategiesArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Print strategies as pretty JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: StrategiesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (optimizer, request, holidays) = args.request.load()?;
    let results = generate_strategies(&optimizer, &request, &holidays);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for result in &results {
        println!(
            "{:<16} score {:>8.2}  {} leave day(s), {} days off",
            kind_label(result.kind),
            result.plan.score,
            result.plan.leave_days.len(),
            result.plan.total_days_off
        );
        for day in &result.plan.leave_days {
            println!("  {day}");
        }
    }
    Ok(())
}

fn kind_label(kind: StrategyKind) -> &'static str {
    match kind {
        StrategyKind::Balanced => "balanced",
        StrategyKind::FrontLoaded => "front-loaded",
        StrategyKind::BackLoaded => "back-loaded",
        StrategyKind::QuarterlySpread => "quarterly",
    }
}
