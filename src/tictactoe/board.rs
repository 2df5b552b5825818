//! Board state representation and basic operations

use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{action::Action, lines::LineAnalyzer};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game. X always opens and maximizes; O minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Whether this player maximizes utility
    pub fn is_maximizer(self) -> bool {
        self == Player::X
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" | "first" => Ok(Player::X),
            "o" | "second" => Ok(Player::O),
            other => Err(crate::Error::InvalidConfiguration {
                message: format!("invalid player '{other}' (expected 'x' or 'o')"),
            }),
        }
    }
}

/// Immutable 3x3 board.
///
/// There is no stored turn: whose move it is follows from the mark counts,
/// so a `BoardState` alone determines the position. Every move produces a
/// new value; nothing mutates a board after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardState {
    cells: [Cell; 9],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

impl BoardState {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
        }
    }

    /// Build a board from raw cells, checking that it is a position legal
    /// play could reach: X is level with O or one ahead, and at most one
    /// player holds a completed line.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPieceCounts`] or
    /// [`crate::Error::ConflictingWinners`].
    pub fn from_cells(cells: [Cell; 9]) -> Result<Self, crate::Error> {
        let count = Self::count_pieces(&cells);
        if count.x != count.o && count.x != count.o + 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        let board = BoardState { cells };
        if board.has_won(Player::X) && board.has_won(Player::O) {
            return Err(crate::Error::ConflictingWinners {
                context: board.encode(),
            });
        }

        Ok(board)
    }

    /// Helper: Parse 9 cells from a slice of characters.
    fn parse_cells(chars: &[char], context: &str) -> Result<[Cell; 9], crate::Error> {
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: context.to_string(),
            })?;
        }

        Ok(cells)
    }

    /// Helper: Count pieces on the board.
    fn count_pieces(cells: &[Cell; 9]) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    /// Create a board from a string representation.
    ///
    /// The string holds 9 cell characters in row-major order. Whitespace and
    /// `|` separators are ignored, so `"XO.|.X.|..O"` and `"XO. .X. ..O"` both
    /// parse.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The board does not have exactly 9 cell characters
    /// - Any character is not a valid cell representation
    /// - The piece counts break the turn order
    /// - Both players have a completed line
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        let cells = Self::parse_cells(&chars, s)?;
        Self::from_cells(cells)
    }

    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Get the cell at an action's coordinate
    pub fn get(&self, action: Action) -> Cell {
        self.cells[action.index()]
    }

    /// Check if the cell at an action's coordinate is empty
    pub fn is_empty_at(&self, action: Action) -> bool {
        self.get(action) == Cell::Empty
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = Self::count_pieces(&self.cells);
        count.x + count.o
    }

    /// Whose turn it is, derived from the mark counts: X moves whenever it
    /// has no more marks than O.
    ///
    /// Defined for every board, terminal ones included.
    pub fn to_move(&self) -> Player {
        let count = Self::count_pieces(&self.cells);
        if count.x <= count.o {
            Player::X
        } else {
            Player::O
        }
    }

    /// All empty cells in row-major order. Empty iff the board is full.
    pub fn actions(&self) -> BTreeSet<Action> {
        Action::all().filter(|&a| self.is_empty_at(a)).collect()
    }

    /// Every legal action paired with the board it produces, row-major.
    pub fn successors(&self) -> impl Iterator<Item = (Action, BoardState)> + '_ {
        let mark = self.to_move().to_cell();
        Action::all()
            .filter(move |&a| self.is_empty_at(a))
            .map(move |a| (a, self.with_mark(a, mark)))
    }

    /// Play the side to move at `action` and return the new board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] if the cell is occupied; an
    /// occupied cell is never overwritten.
    #[must_use = "result returns a new board state; the original is unchanged"]
    pub fn result(&self, action: Action) -> Result<BoardState, crate::Error> {
        if !self.is_empty_at(action) {
            return Err(crate::Error::InvalidMove {
                row: action.row(),
                col: action.col(),
            });
        }
        Ok(self.with_mark(action, self.to_move().to_cell()))
    }

    fn with_mark(&self, action: Action, mark: Cell) -> BoardState {
        let mut cells = self.cells;
        cells[action.index()] = mark;
        BoardState { cells }
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winner(&self.cells)
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Score from X's perspective: `1` if X won, `-1` if O won, `0` otherwise.
    ///
    /// Only meaningful on terminal boards.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Compact 9-character encoding, `.` for empty cells
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for BoardState {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

/// Renders rows as `X|O| ` separated by `-+-+-`, empty cells blank.
impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            let rendered: Vec<String> = cells
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => " ".to_string(),
                    other => other.to_char().to_string(),
                })
                .collect();
            write!(f, "{}", rendered.join("|"))?;
            if row < 2 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Action {
        Action::new(row, col).unwrap()
    }

    #[test]
    fn test_new_board() {
        let board = BoardState::new();
        assert_eq!(board.to_move(), Player::X);
        assert!(board.cells().iter().all(|&c| c == Cell::Empty));
        assert_eq!(board.actions().len(), 9);
    }

    #[test]
    fn test_result() {
        let board = BoardState::new();

        let new_board = board.result(at(1, 1)).unwrap();
        assert_eq!(new_board.get(at(1, 1)), Cell::X);
        assert_eq!(new_board.to_move(), Player::O);
        // input untouched
        assert_eq!(board.get(at(1, 1)), Cell::Empty);

        let err = new_board.result(at(1, 1)).unwrap_err();
        assert!(err.to_string().contains("occupied"));
    }

    #[test]
    fn test_actions_shrink() {
        let board = BoardState::new().result(at(0, 0)).unwrap();
        let actions = board.actions();
        assert_eq!(actions.len(), 8);
        assert!(!actions.contains(&at(0, 0)));
        assert_eq!(actions.first(), Some(&at(0, 1)));
    }

    #[test]
    fn test_successors_match_result() {
        let board = BoardState::from_string("XO.......").unwrap();
        for (action, child) in board.successors() {
            assert_eq!(board.result(action).unwrap(), child);
        }
        assert_eq!(board.successors().count(), 7);
    }

    #[test]
    fn test_win_detection_diagonal() {
        let board = BoardState::from_string("XO..XO..X").unwrap();
        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::X));
        assert_eq!(board.utility(), 1);
    }

    #[test]
    fn test_o_win() {
        let board = BoardState::from_string("XOXXO..O.").unwrap();
        assert_eq!(board.winner(), Some(Player::O));
        assert_eq!(board.utility(), -1);
        // turn is still defined on a finished board
        assert_eq!(board.to_move(), Player::X);
    }

    #[test]
    fn test_draw_detection() {
        let board = BoardState::from_string("XOXXOOOXX").unwrap();
        assert!(board.is_terminal());
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
        assert_eq!(board.utility(), 0);
        assert!(board.actions().is_empty());
    }

    #[test]
    fn test_from_string() {
        let board = BoardState::from_string("XOX|...|...").unwrap();
        assert_eq!(board.get(at(0, 0)), Cell::X);
        assert_eq!(board.get(at(0, 1)), Cell::O);
        assert_eq!(board.to_move(), Player::O);

        assert!(matches!(
            BoardState::from_string("XO"),
            Err(crate::Error::InvalidBoardLength { got: 2, .. })
        ));
        assert!(matches!(
            BoardState::from_string("XOZ......"),
            Err(crate::Error::InvalidCellCharacter { character: 'Z', .. })
        ));
    }

    #[test]
    fn test_from_string_rejects_bad_counts() {
        assert!(matches!(
            BoardState::from_string("XX......."),
            Err(crate::Error::InvalidPieceCounts {
                x_count: 2,
                o_count: 0
            })
        ));
        // O can never be ahead
        assert!(BoardState::from_string("O........").is_err());
    }

    #[test]
    fn test_from_string_rejects_two_winners() {
        assert!(matches!(
            BoardState::from_string("XXXOOO..."),
            Err(crate::Error::ConflictingWinners { .. })
        ));
    }

    #[test]
    fn test_player_parsing() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!(" Second ".parse::<Player>().unwrap(), Player::O);
        assert!("z".parse::<Player>().is_err());
    }

    #[test]
    fn test_display() {
        let board = BoardState::from_string("XOX.O.X..").unwrap();
        assert_eq!(format!("{board}"), "X|O|X\n-+-+-\n |O| \n-+-+-\nX| | ");
    }

    #[test]
    fn test_encode() {
        let board = BoardState::from_string("xo.......").unwrap();
        assert_eq!(board.encode(), "XO.......");
        assert_eq!(BoardState::new().encode(), ".........");
    }
}
