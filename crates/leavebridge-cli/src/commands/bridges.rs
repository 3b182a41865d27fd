use clap::Args;

use super::RequestArgs;

#[derive(Args)]
pub struct BridgesArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Show at most this many candidates
    #[arg(long)]
    pub top: Option<usize>,

    /// Print candidates as pretty JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: BridgesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (optimizer, request, holidays) = args.request.load()?;
    let mut bridges = optimizer.scored_bridges(&request, &holidays);
    if let Some(top) = args.top {
        bridges.truncate(top);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&bridges)?);
        return Ok(());
    }

    if bridges.is_empty() {
        println!("no bridge candidates");
        return Ok(());
    }
    for bridge in &bridges {
        let c = &bridge.candidate;
        println!(
            "{:>7.2}  {} .. {}  {} leave day(s) -> {} days off",
            bridge.score,
            c.first_day(),
            c.days[c.days.len() - 1],
            c.gap_len,
            c.merged_len
        );
    }
    Ok(())
}
