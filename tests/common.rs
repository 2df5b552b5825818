//! Common test utilities: random legal play from the empty board.

use alphabeta::{BoardState, tictactoe::Action};
use rand::{rngs::StdRng, seq::IteratorRandom};

/// Play uniformly random legal moves until the game ends.
///
/// Returns every board along the way, the empty board first and the
/// terminal board last, together with the actions taken.
pub fn random_game(rng: &mut StdRng) -> (Vec<BoardState>, Vec<Action>) {
    let mut boards = vec![BoardState::new()];
    let mut actions = Vec::new();
    let mut board = BoardState::new();

    while !board.is_terminal() {
        let Some(action) = board.actions().into_iter().choose(rng) else {
            break;
        };
        board = board.result(action).expect("actions() only yields empty cells");
        boards.push(board);
        actions.push(action);
    }

    (boards, actions)
}
