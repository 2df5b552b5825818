//! High-level game management

use serde::{Deserialize, Serialize};

use super::{
    action::Action,
    board::{BoardState, Player},
};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a terminal board, `None` while play continues.
    pub fn of(board: &BoardState) -> Option<Self> {
        if let Some(winner) = board.winner() {
            Some(GameOutcome::Win(winner))
        } else if board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

/// A game in progress with its move history
#[derive(Debug, Clone)]
pub struct Game {
    current: BoardState,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::from_position(BoardState::new())
    }

    /// Continue play from an arbitrary position
    pub fn from_position(board: BoardState) -> Self {
        Game {
            current: board,
            moves: Vec::new(),
            outcome: GameOutcome::of(&board),
        }
    }

    /// Play a move for the side to move and return the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game has finished and
    /// [`crate::Error::InvalidMove`] for an occupied cell.
    pub fn play(&mut self, action: Action) -> Result<BoardState, crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let player = self.current.to_move();
        let next = self.current.result(action)?;

        self.moves.push(Move { action, player });
        self.current = next;
        self.outcome = GameOutcome::of(&next);

        Ok(next)
    }

    pub fn current(&self) -> &BoardState {
        &self.current
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
