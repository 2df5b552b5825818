//! Cross-checking the pruned search against the full tree
//!
//! For each non-terminal position the two root searches must report the same
//! value, and pruning may only ever reduce the node count.

use std::collections::{HashSet, VecDeque};

use indicatif::ProgressBar;
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::Serialize;
use tracing::{info, warn};

use super::{
    alphabeta::{SearchOutcome, minimax},
    exhaustive::minimax_unpruned,
    nodes::NodeCount,
};
use crate::tictactoe::BoardState;

/// A position where the searches disagree or pruning visited more nodes
#[derive(Debug, Clone, Serialize)]
pub struct Disagreement {
    pub board: String,
    pub pruned: SearchOutcome,
    pub unpruned: SearchOutcome,
}

/// Totals over a verification sweep
#[derive(Debug, Clone, Default, Serialize)]
pub struct VerificationReport {
    /// Non-terminal positions searched
    pub positions: usize,
    /// Positions where at least one cutoff fired
    pub cutoff_positions: usize,
    pub pruned_nodes: NodeCount,
    pub unpruned_nodes: NodeCount,
    pub disagreements: Vec<Disagreement>,
}

impl VerificationReport {
    pub fn is_consistent(&self) -> bool {
        self.disagreements.is_empty()
    }

    /// Fraction of the full tree the pruned search skipped
    pub fn pruning_ratio(&self) -> f64 {
        if self.unpruned_nodes.get() == 0 {
            return 0.0;
        }
        1.0 - self.pruned_nodes.get() as f64 / self.unpruned_nodes.get() as f64
    }
}

/// Every position reachable from the empty board through legal play,
/// terminal ones included, sorted by encoding.
///
/// This is the classic 5,478-position state space.
pub fn reachable_positions() -> Vec<BoardState> {
    let root = BoardState::new();
    let mut visited = HashSet::from([root]);
    let mut queue = VecDeque::from([root]);
    let mut positions = Vec::new();

    while let Some(state) = queue.pop_front() {
        positions.push(state);
        if state.is_terminal() {
            continue;
        }
        for (_, next) in state.successors() {
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    positions.sort_by_key(BoardState::encode);
    positions
}

/// Draw `count` non-terminal positions from random playouts.
///
/// Each sample plays uniformly random moves from the empty board for a random
/// number of plies, stopping short of the end of the game. The same seed
/// always yields the same positions.
pub fn sample_positions(count: usize, seed: u64) -> Vec<BoardState> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut samples = Vec::with_capacity(count);

    while samples.len() < count {
        let mut line = vec![BoardState::new()];
        let mut state = BoardState::new();
        loop {
            let moves: Vec<BoardState> = state.successors().map(|(_, next)| next).collect();
            let Some(&next) = moves.choose(&mut rng) else {
                break;
            };
            if next.is_terminal() {
                break;
            }
            line.push(next);
            state = next;
        }
        if let Some(&pick) = line.choose(&mut rng) {
            samples.push(pick);
        }
    }

    samples
}

/// Run both searches on every non-terminal position in `positions`.
///
/// Terminal positions are skipped. `progress`, when given, advances once per
/// input position.
pub fn verify_positions(
    positions: &[BoardState],
    progress: Option<&ProgressBar>,
) -> crate::Result<VerificationReport> {
    let mut report = VerificationReport::default();

    for board in positions {
        if let Some(pb) = progress {
            pb.inc(1);
        }
        if board.is_terminal() {
            continue;
        }

        let pruned = minimax(board)?;
        let unpruned = minimax_unpruned(board)?;

        report.positions += 1;
        report.pruned_nodes += pruned.nodes;
        report.unpruned_nodes += unpruned.nodes;
        if pruned.nodes < unpruned.nodes {
            report.cutoff_positions += 1;
        }

        if pruned.value != unpruned.value || pruned.nodes > unpruned.nodes {
            warn!(
                board = %board.encode(),
                pruned = pruned.value,
                unpruned = unpruned.value,
                "search disagreement"
            );
            report.disagreements.push(Disagreement {
                board: board.encode(),
                pruned,
                unpruned,
            });
        }
    }

    info!(
        positions = report.positions,
        pruned = report.pruned_nodes.get(),
        unpruned = report.unpruned_nodes.get(),
        disagreements = report.disagreements.len(),
        "verification sweep finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_space_size() {
        let positions = reachable_positions();
        assert_eq!(positions.len(), 5_478);
        assert_eq!(positions.iter().filter(|b| !b.is_terminal()).count(), 4_520);
    }

    #[test]
    fn samples_are_reproducible_and_live() {
        let first = sample_positions(25, 7);
        let second = sample_positions(25, 7);
        assert_eq!(first, second);
        assert_eq!(first.len(), 25);
        assert!(first.iter().all(|b| !b.is_terminal()));
    }

    #[test]
    fn terminal_positions_are_skipped() {
        let positions = [
            BoardState::from_string("XXX|OO.|...").unwrap(),
            BoardState::from_string("XOX|XOO|OX.").unwrap(),
        ];
        let report = verify_positions(&positions, None).unwrap();
        assert_eq!(report.positions, 1);
        assert!(report.is_consistent());
        // a single legal move leaves nothing to prune
        assert_eq!(report.cutoff_positions, 0);
        assert_eq!(report.pruning_ratio(), 0.0);
    }
}
