//! Moves and move errors.
//!
//! A [`Move`] records who placed a marker where. Sessions keep them in
//! order so the board can be replayed and checked.

use serde::{Deserialize, Serialize};
use tictactoe_engine::{Marker, Position};
use tracing::instrument;

/// A marker placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The marker placed.
    pub marker: Marker,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(marker: Marker, position: Position) -> Self {
        Self { marker, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.marker, self.position.label())
    }
}

/// A placement the session refused.
///
/// These are expected during play: the session leaves its state untouched
/// and the front end may ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The computer holds the turn.
    #[display("It's {}'s turn", _0)]
    NotYourTurn(#[error(not(source))] Marker),
}
