//! Exhaustive alpha-beta solver for Tic-Tac-Toe
//!
//! This crate provides:
//! - Immutable board model with turn, legality, terminal and utility queries
//! - Alpha-beta minimax that reports the nodes it visited
//! - Unpruned minimax and a sweep that checks the two agree
//! - An interactive text shell for playing against the solver

pub mod cli;
pub mod error;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{NodeCount, SearchOutcome, minimax};
pub use tictactoe::{Action, BoardState, Cell, Player};
