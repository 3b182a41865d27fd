use clap::Args;
use leavebridge_core::LeavePlan;

use super::RequestArgs;

#[derive(Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Print the plan as pretty JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (optimizer, request, holidays) = args.request.load()?;
    let plan = optimizer.optimize(&request, &holidays);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print_plan(&plan);
    }
    Ok(())
}

fn print_plan(plan: &LeavePlan) {
    if plan.leave_days.is_empty() {
        println!("no leave days recommended");
        return;
    }

    println!("recommended leave days ({}):", plan.leave_days.len());
    for day in &plan.leave_days {
        println!("  {day}");
    }
    println!("breaks:");
    for b in &plan.breaks {
        println!(
            "  {} .. {}  {} days ({} leave)",
            b.start, b.end, b.duration, b.leave_days_used
        );
    }
    println!("total days off: {}", plan.total_days_off);
    println!("score: {:.2}", plan.score);
}
