//! Exhaustive adversarial search over Tic-Tac-Toe positions
//!
//! - [`alphabeta`]: minimax with alpha-beta pruning and the move-selection driver
//! - [`exhaustive`]: plain minimax over the full tree, for comparison
//! - [`nodes`]: node-count bookkeeping threaded through both searches
//! - [`verify`]: agreement checks between the two over many positions

pub mod alphabeta;
pub mod exhaustive;
pub mod nodes;
pub mod verify;

pub use alphabeta::{NEG_INFINITY, POS_INFINITY, SearchOutcome, max_value, min_value, minimax};
pub use exhaustive::{full_value, minimax_unpruned};
pub use nodes::{Evaluation, NodeCount};
pub use verify::{
    Disagreement, VerificationReport, reachable_positions, sample_positions, verify_positions,
};
