//! Plain minimax over the whole game tree.
//!
//! Same node-count contract and root tie-breaking as the alpha-beta search,
//! without any cutoffs. Its counts are the ceiling the pruned search is
//! measured against.

use tracing::debug;

use super::{
    alphabeta::{NEG_INFINITY, POS_INFINITY, SearchOutcome, select_root},
    nodes::{Evaluation, NodeCount},
};
use crate::tictactoe::BoardState;

/// Exact value of `board`, visiting every descendant.
pub fn full_value(board: &BoardState) -> Evaluation {
    if board.is_terminal() {
        return Evaluation::leaf(board.utility());
    }

    let maximizing = board.to_move().is_maximizer();
    let mut value = if maximizing { NEG_INFINITY } else { POS_INFINITY };
    let mut nodes = NodeCount::ONE;

    for (_, child) in board.successors() {
        let reply = full_value(&child);
        nodes += reply.nodes;
        value = if maximizing {
            value.max(reply.value)
        } else {
            value.min(reply.value)
        };
    }

    Evaluation { value, nodes }
}

/// Unpruned counterpart of [`super::minimax`].
///
/// # Errors
///
/// Returns [`crate::Error::TerminalPosition`] if the game is already over.
pub fn minimax_unpruned(board: &BoardState) -> crate::Result<SearchOutcome> {
    let outcome = select_root(board, full_value)?;
    debug!(
        board = %board.encode(),
        action = %outcome.action,
        value = outcome.value,
        nodes = outcome.nodes.get(),
        "unpruned search complete"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::minimax;

    #[test]
    fn full_tree_size() {
        let eval = full_value(&BoardState::new());
        assert_eq!(eval.value, 0);
        assert_eq!(eval.nodes.get(), 549_946);
    }

    #[test]
    fn root_count_matches_subtree_count() {
        let board = BoardState::from_string("XO.......").unwrap();
        let outcome = minimax_unpruned(&board).unwrap();
        assert_eq!(outcome.nodes, full_value(&board).nodes);
        assert_eq!(outcome.nodes.get(), 8_232);
        assert_eq!(outcome.value, 1);
    }

    #[test]
    fn agrees_with_pruned_search() {
        for text in ["X........", "....X....", "XO.......", "XOX.O....", "X...O...X"] {
            let board = BoardState::from_string(text).unwrap();
            let pruned = minimax(&board).unwrap();
            let full = minimax_unpruned(&board).unwrap();
            assert_eq!(pruned.value, full.value, "value mismatch on {text}");
            assert_eq!(pruned.action, full.action, "action mismatch on {text}");
            assert!(pruned.nodes < full.nodes, "no pruning on {text}");
        }
    }
}
