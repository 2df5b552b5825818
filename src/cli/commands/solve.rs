//! Solve command - best move for a single position

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use super::parse_board;
use crate::{
    cli::output::{describe_value, format_number, print_kv},
    search::{SearchOutcome, minimax},
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Compute the optimal move for a position")]
pub struct SolveArgs {
    /// Board as 9 cells in row-major order, e.g. "XX.|OO.|..." (default: empty board)
    pub board: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SolveReport {
    board: String,
    to_move: Player,
    #[serde(flatten)]
    outcome: SearchOutcome,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = parse_board(args.board.as_deref())?;
    let outcome = minimax(&board)?;

    if args.json {
        let report = SolveReport {
            board: board.encode(),
            to_move: board.to_move(),
            outcome,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{board}\n");
    print_kv("To move", &board.to_move().to_string());
    print_kv("Best move", &outcome.action.to_string());
    print_kv(
        "Value",
        &format!("{} ({})", outcome.value, describe_value(outcome.value)),
    );
    print_kv("Nodes visited", &format_number(outcome.nodes.get()));
    Ok(())
}
