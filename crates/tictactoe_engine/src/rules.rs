//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`] snapshot. Nothing here mutates its input.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

use super::{Board, Outcome};
use tracing::instrument;

/// Classifies a board as won, drawn or in progress.
///
/// A win is checked first, so a full board with a complete line is a win.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn evaluate(board: &Board) -> Outcome {
    classify(board)
}

/// [`evaluate`] without the span, for the search hot loop.
pub(crate) fn classify(board: &Board) -> Outcome {
    if let Some((marker, line)) = win::first_line(board) {
        Outcome::Win { marker, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
