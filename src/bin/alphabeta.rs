//! alphabeta CLI - play against and inspect an exhaustive Tic-Tac-Toe solver
//!
//! This CLI provides:
//! - An interactive game against the solver
//! - Best-move lookup for arbitrary positions
//! - Pruned versus unpruned search comparisons
//! - Agreement checks over the whole state space

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "alphabeta")]
#[command(version, about = "Exhaustive alpha-beta solver for Tic-Tac-Toe", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the solver
    Play(alphabeta::cli::commands::play::PlayArgs),

    /// Compute the optimal move for a position
    Solve(alphabeta::cli::commands::solve::SolveArgs),

    /// Compare alpha-beta against full minimax on a position
    Compare(alphabeta::cli::commands::compare::CompareArgs),

    /// Verify alpha-beta against full minimax across positions
    Verify(alphabeta::cli::commands::verify::VerifyArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    alphabeta::cli::init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => alphabeta::cli::commands::play::execute(args),
        Commands::Solve(args) => alphabeta::cli::commands::solve::execute(args),
        Commands::Compare(args) => alphabeta::cli::commands::compare::execute(args),
        Commands::Verify(args) => alphabeta::cli::commands::verify::execute(args),
    }
}
