//! Minimax with alpha-beta pruning.
//!
//! X maximizes and O minimizes. Both evaluators search to terminal positions;
//! there is no depth limit and no heuristic evaluation. Children are visited
//! in row-major order, which fixes both the node counts and the move chosen
//! among equally good ones.

use serde::Serialize;
use tracing::{debug, trace};

use super::nodes::{Evaluation, NodeCount};
use crate::tictactoe::{Action, BoardState};

/// Lower bound of the search window
pub const NEG_INFINITY: i32 = i32::MIN;
/// Upper bound of the search window
pub const POS_INFINITY: i32 = i32::MAX;

/// Move chosen by a root search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub action: Action,
    /// Minimax value of the searched position, from X's perspective
    pub value: i32,
    /// Every node visited, the root included
    pub nodes: NodeCount,
}

/// Value of `board` with X to move, searched inside the window `[alpha, beta]`.
///
/// Stops at the first child whose value reaches `beta`: O already has
/// something at least as good elsewhere, so the remaining children cannot
/// matter.
pub fn max_value(board: &BoardState, mut alpha: i32, beta: i32) -> Evaluation {
    if board.is_terminal() {
        return Evaluation::leaf(board.utility());
    }

    let mut value = NEG_INFINITY;
    let mut nodes = NodeCount::default();

    for (_, child) in board.successors() {
        let reply = min_value(&child, alpha, beta);
        value = value.max(reply.value);
        nodes += reply.nodes;
        if value >= beta {
            return Evaluation {
                value,
                nodes: nodes + NodeCount::ONE,
            };
        }
        alpha = alpha.max(value);
    }

    Evaluation {
        value,
        nodes: nodes + NodeCount::ONE,
    }
}

/// Value of `board` with O to move; mirror image of [`max_value`], cutting
/// off once a child's value drops to `alpha`.
pub fn min_value(board: &BoardState, alpha: i32, mut beta: i32) -> Evaluation {
    if board.is_terminal() {
        return Evaluation::leaf(board.utility());
    }

    let mut value = POS_INFINITY;
    let mut nodes = NodeCount::default();

    for (_, child) in board.successors() {
        let reply = max_value(&child, alpha, beta);
        value = value.min(reply.value);
        nodes += reply.nodes;
        if value <= alpha {
            return Evaluation {
                value,
                nodes: nodes + NodeCount::ONE,
            };
        }
        beta = beta.min(value);
    }

    Evaluation {
        value,
        nodes: nodes + NodeCount::ONE,
    }
}

/// Pick the best move for the side to move.
///
/// Each root child is searched with a fresh `(-inf, +inf)` window. The first
/// action reaching the best value wins ties.
///
/// # Errors
///
/// Returns [`crate::Error::TerminalPosition`] if the game is already over.
pub fn minimax(board: &BoardState) -> crate::Result<SearchOutcome> {
    let maximizing = board.to_move().is_maximizer();
    let outcome = select_root(board, |child| {
        if maximizing {
            min_value(child, NEG_INFINITY, POS_INFINITY)
        } else {
            max_value(child, NEG_INFINITY, POS_INFINITY)
        }
    })?;

    debug!(
        board = %board.encode(),
        action = %outcome.action,
        value = outcome.value,
        nodes = outcome.nodes.get(),
        "alpha-beta search complete"
    );
    Ok(outcome)
}

/// Shared root loop: evaluate every child, keep the strictly best one, and
/// total the nodes (plus one for the root).
pub(crate) fn select_root<F>(board: &BoardState, evaluate: F) -> crate::Result<SearchOutcome>
where
    F: Fn(&BoardState) -> Evaluation,
{
    if board.is_terminal() {
        return Err(crate::Error::TerminalPosition {
            board: board.encode(),
        });
    }

    let maximizing = board.to_move().is_maximizer();
    let mut best: Option<(Action, i32)> = None;
    let mut nodes = NodeCount::ONE;

    for (action, child) in board.successors() {
        let reply = evaluate(&child);
        nodes += reply.nodes;
        trace!(%action, value = reply.value, nodes = reply.nodes.get(), "root branch");

        let improves = match best {
            None => true,
            Some((_, best_value)) if maximizing => reply.value > best_value,
            Some((_, best_value)) => reply.value < best_value,
        };
        if improves {
            best = Some((action, reply.value));
        }
    }

    let (action, value) = best.ok_or_else(|| crate::Error::TerminalPosition {
        board: board.encode(),
    })?;

    Ok(SearchOutcome {
        action,
        value,
        nodes,
    })
}
