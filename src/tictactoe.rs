//! Tic-Tac-Toe rules: board state, transitions and game records

pub mod action;
pub mod board;
pub mod game;
pub mod lines;
pub mod rules;

pub use action::Action;
pub use board::{BoardState, Cell, Player};
pub use game::{Game, GameOutcome, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use rules::{actions, initial_state, player, result, terminal, utility, winner};
