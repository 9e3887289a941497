//! Win detection logic for tic-tac-toe.

use super::super::{Board, Line, Marker, Square};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns the marker and the first complete line in [`Line::ALL`] order,
/// `None` otherwise.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<(Marker, Line)> {
    first_line(board)
}

pub(crate) fn first_line(board: &Board) -> Option<(Marker, Line)> {
    for line in Line::ALL {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        if let Square::Occupied(marker) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some((marker, line));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Marker::X));
        board.set(Position::TopCenter, Square::Occupied(Marker::X));
        board.set(Position::TopRight, Square::Occupied(Marker::X));
        assert_eq!(check_winner(&board), Some((Marker::X, Line::ALL[0])));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopRight, Square::Occupied(Marker::O));
        board.set(Position::Center, Square::Occupied(Marker::O));
        board.set(Position::BottomLeft, Square::Occupied(Marker::O));
        assert_eq!(check_winner(&board), Some((Marker::O, Line::ALL[7])));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Marker::X));
        board.set(Position::TopCenter, Square::Occupied(Marker::X));
        board.set(Position::TopRight, Square::Occupied(Marker::O));
        assert_eq!(check_winner(&board), None);
    }
}
