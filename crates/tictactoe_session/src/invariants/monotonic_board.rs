//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::GameSession;
use tictactoe_engine::{Board, Square};

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must never land on an
/// occupied square and must reproduce the session's board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameSession> for MonotonicBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        let mut reconstructed = Board::new();

        for mov in session.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.marker));
        }

        reconstructed == session.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
