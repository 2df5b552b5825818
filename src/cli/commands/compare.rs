//! Compare command - pruned versus unpruned search on one position

use anyhow::{Result, ensure};
use clap::Parser;

use super::parse_board;
use crate::{
    cli::output::{describe_value, format_number, print_kv, print_section},
    search::{minimax, minimax_unpruned},
};

#[derive(Parser, Debug)]
#[command(about = "Compare alpha-beta against full minimax on a position")]
pub struct CompareArgs {
    /// Board as 9 cells in row-major order (default: empty board)
    pub board: Option<String>,
}

pub fn execute(args: CompareArgs) -> Result<()> {
    let board = parse_board(args.board.as_deref())?;
    let pruned = minimax(&board)?;
    let full = minimax_unpruned(&board)?;

    ensure!(
        pruned.value == full.value,
        "searches disagree on {}: alpha-beta {} vs minimax {}",
        board.encode(),
        pruned.value,
        full.value
    );

    print_section("Search comparison");
    println!("{board}\n");
    print_kv("Value", &describe_value(pruned.value).to_string());
    print_kv("Alpha-beta move", &pruned.action.to_string());
    print_kv("Minimax move", &full.action.to_string());
    print_kv("Alpha-beta nodes", &format_number(pruned.nodes.get()));
    print_kv("Minimax nodes", &format_number(full.nodes.get()));
    let saved = 1.0 - pruned.nodes.get() as f64 / full.nodes.get() as f64;
    print_kv("Pruned away", &format!("{:.1}%", saved * 100.0));
    Ok(())
}
