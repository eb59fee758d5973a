//! linkscan command-line entry point

use clap::Parser;
use linkscan_cli::commands::Commands;

/// Token scanner for link detection in plain text
#[derive(Debug, Parser)]
#[command(name = "linkscan", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tokenize(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::List { subcommand } => subcommand.execute(),
    }
}
