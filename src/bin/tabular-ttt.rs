//! tabular-ttt CLI - play against, or train, a Tic-Tac-Toe agent that learns
//! from every finished game

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tabular-ttt")]
#[command(version, about = "Tic-Tac-Toe agent with a tabular value policy", long_about = None)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively against the agent
    Play(tabular_ttt::cli::commands::play::PlayArgs),

    /// Train the agent against a scripted opponent
    Train(tabular_ttt::cli::commands::train::TrainArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tabular_ttt::logging::init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => tabular_ttt::cli::commands::play::execute(args),
        Commands::Train(args) => tabular_ttt::cli::commands::train::execute(args),
    }
}
