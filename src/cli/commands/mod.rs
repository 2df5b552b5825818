//! Subcommand implementations

pub mod compare;
pub mod play;
pub mod solve;
pub mod verify;

use anyhow::{Context, Result};

use crate::tictactoe::BoardState;

/// Parse a board argument, defaulting to the empty board.
pub(crate) fn parse_board(text: Option<&str>) -> Result<BoardState> {
    match text {
        Some(text) => text
            .parse::<BoardState>()
            .with_context(|| format!("Failed to parse board '{text}'")),
        None => Ok(BoardState::new()),
    }
}
