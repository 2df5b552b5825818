//! Board coordinates

use std::fmt;

use serde::{Deserialize, Serialize};

/// A `(row, col)` coordinate on the 3x3 board, both in `0..3`.
///
/// Actions order row-major, so a `BTreeSet<Action>` enumerates cells
/// top-left to bottom-right.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Action {
    row: usize,
    col: usize,
}

impl Action {
    /// Create an action, rejecting coordinates outside the board.
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row >= 3 || col >= 3 {
            return Err(crate::Error::OutOfBounds { row, col });
        }
        Ok(Action { row, col })
    }

    /// Create an action from 1-based coordinates as typed by a user.
    pub fn from_one_based(row: usize, col: usize) -> Result<Self, crate::Error> {
        match (row.checked_sub(1), col.checked_sub(1)) {
            (Some(r), Some(c)) => Self::new(r, c),
            _ => Err(crate::Error::OutOfBounds { row, col }),
        }
    }

    /// Action for a flat cell index (`row * 3 + col`).
    pub(crate) const fn from_index(index: usize) -> Self {
        Action {
            row: index / 3,
            col: index % 3,
        }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Flat cell index in `0..9`
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// All nine cells in row-major order
    pub fn all() -> impl Iterator<Item = Action> {
        (0..9).map(Action::from_index)
    }
}

/// Displays the coordinate 1-based, the way the shell asks for it.
impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row + 1, self.col + 1)
    }
}
