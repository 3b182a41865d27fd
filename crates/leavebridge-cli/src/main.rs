use clap::{CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "leavebridge-cli", version, about = "Leavebridge CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a leave plan for a year
    Plan(commands::plan::PlanArgs),
    /// List ranked bridge candidates
    Bridges(commands::bridges::BridgesArgs),
    /// Compare alternative planning strategies
    Strategies(commands::strategies::StrategiesArgs),
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Plan(args) => commands::plan::run(args),
        Commands::Bridges(args) => commands::bridges::run(args),
        Commands::Strategies(args) => commands::strategies::run(args),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "leavebridge-cli", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
