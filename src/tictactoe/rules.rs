//! Free-function view of the game rules.
//!
//! These mirror the methods on [`BoardState`] for callers that prefer the
//! classic `player`/`actions`/`result`/`winner`/`terminal`/`utility` vocabulary.

use std::collections::BTreeSet;

use super::{Action, BoardState, Player};

/// The empty starting board
pub fn initial_state() -> BoardState {
    BoardState::new()
}

/// The player whose turn it is
pub fn player(board: &BoardState) -> Player {
    board.to_move()
}

/// Every empty cell, row-major
pub fn actions(board: &BoardState) -> BTreeSet<Action> {
    board.actions()
}

/// The board after the side to move plays `action`.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidMove`] if the cell is occupied.
pub fn result(board: &BoardState, action: Action) -> crate::Result<BoardState> {
    board.result(action)
}

pub fn winner(board: &BoardState) -> Option<Player> {
    board.winner()
}

pub fn terminal(board: &BoardState) -> bool {
    board.is_terminal()
}

/// `1` for an X win, `-1` for an O win, `0` otherwise
pub fn utility(board: &BoardState) -> i32 {
    board.utility()
}
