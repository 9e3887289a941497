//! Exhaustive minimax move selection.
//!
//! The search walks every legal continuation of the position without
//! pruning, caching or depth discount. A 3x3 board keeps that bounded: the
//! widest call, on an empty board, visits about half a million nodes.

use super::error::SearchError;
use super::rules::classify;
use super::{Board, Marker, Outcome, Position, Square};
use tracing::{debug, instrument};

/// Minimax value of a position from the computer's point of view.
pub type Score = i8;

/// Score of a position the computer has won.
pub const WIN: Score = 1;
/// Score of a drawn position.
pub const DRAW: Score = 0;
/// Score of a position the computer has lost.
pub const LOSS: Score = -1;

/// Picks the best move for `ai` on `board`.
///
/// Candidates are tried in row-major order and only a strictly better score
/// replaces the current best, so ties go to the first cell scanned. On an
/// empty board every opening scores a draw and the result is
/// [`Position::TopLeft`].
///
/// The search mutates and restores a private copy; `board` is untouched.
///
/// # Errors
///
/// [`SearchError::NoLegalMove`] on a full board, [`SearchError::GameOver`]
/// when a line is already complete.
#[instrument(skip(board), fields(board = %board))]
pub fn select_move(board: &Board, ai: Marker) -> Result<Position, SearchError> {
    if board.is_full() {
        return Err(SearchError::NoLegalMove);
    }
    if classify(board).is_terminal() {
        return Err(SearchError::GameOver);
    }

    let mut scratch = *board;
    let mut best: Option<(Position, Score)> = None;

    for pos in Position::ALL {
        if !scratch.is_empty(pos) {
            continue;
        }
        scratch.set(pos, Square::Occupied(ai));
        let score = minimax(&mut scratch, ai, ai.opponent());
        scratch.set(pos, Square::Empty);

        if best.is_none_or(|(_, top)| score > top) {
            best = Some((pos, score));
        }
    }

    let (pos, score) = best.ok_or(SearchError::NoLegalMove)?;
    debug!(position = %pos, score, "Selected move");
    Ok(pos)
}

/// Minimax value of `board` for `ai` with `to_move` next to play.
///
/// Terminal boards score [`WIN`], [`LOSS`] or [`DRAW`] regardless of
/// `to_move`.
#[instrument(skip(board), fields(board = %board))]
pub fn score(board: &Board, ai: Marker, to_move: Marker) -> Score {
    let mut scratch = *board;
    minimax(&mut scratch, ai, to_move)
}

fn minimax(board: &mut Board, ai: Marker, to_move: Marker) -> Score {
    match classify(board) {
        Outcome::Win { marker, .. } if marker == ai => return WIN,
        Outcome::Win { .. } => return LOSS,
        Outcome::Draw => return DRAW,
        Outcome::InProgress => {}
    }

    let maximizing = to_move == ai;
    let mut best = if maximizing { Score::MIN } else { Score::MAX };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Square::Occupied(to_move));
        let child = minimax(board, ai, to_move.opponent());
        board.set(pos, Square::Empty);

        best = if maximizing { best.max(child) } else { best.min(child) };
    }

    best
}
