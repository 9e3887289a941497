//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// The symbol a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Marker {
    /// Marker X.
    X,
    /// Marker O.
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a marker.
    Occupied(Marker),
}

impl Square {
    /// Parses a square from `X`, `O`, `.`, `_` or `-`.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'X' => Some(Square::Occupied(Marker::X)),
            'O' => Some(Square::Occupied(Marker::O)),
            '.' | '_' | '-' => Some(Square::Empty),
            _ => None,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// `Board` is `Copy`: handing a board to the evaluator or the move selector
/// never lets them touch the caller's copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from three rows of squares.
    pub fn from_rows(rows: [[Square; 3]; 3]) -> Self {
        let mut board = Self::new();
        for (row, cells) in rows.iter().enumerate() {
            for (col, square) in cells.iter().enumerate() {
                board.squares[row * 3 + col] = *square;
            }
        }
        board
    }

    /// Parses a board from nine symbols in row-major order.
    ///
    /// Whitespace and `|` or `/` separators are ignored, so `"XO./.X./..O"`
    /// and `"XO.  .X.  ..O"` are both accepted.
    pub fn parse(s: &str) -> Option<Self> {
        let mut board = Self::new();
        let mut count = 0;
        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '|' && *c != '/') {
            if count == 9 {
                return None;
            }
            board.squares[count] = Square::from_symbol(c)?;
            count += 1;
        }
        (count == 9).then_some(board)
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|pos| self.is_empty(*pos))
    }

    /// Number of squares holding `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(marker))
            .count()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// The squares as three rows.
    pub fn rows(&self) -> [[Square; 3]; 3] {
        let s = &self.squares;
        [[s[0], s[1], s[2]], [s[3], s[4], s[5]], [s[6], s[7], s[8]]]
    }
}

impl std::fmt::Display for Board {
    /// Empty squares show their keypad number (1-9).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(marker) => write!(f, "{}", marker)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
