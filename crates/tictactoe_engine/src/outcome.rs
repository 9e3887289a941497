//! Terminal classification of a board.

use super::line::Line;
use super::types::Marker;
use serde::{Deserialize, Serialize};

/// Status of a board as reported by [`evaluate`](crate::evaluate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one square is empty.
    #[default]
    InProgress,
    /// `marker` holds all three squares of `line`.
    Win {
        /// The winning marker.
        marker: Marker,
        /// The first complete line in scan order.
        line: Line,
    },
    /// Every square is occupied and no line is complete.
    Draw,
}

impl Outcome {
    /// True for a win or a draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning marker, if any.
    pub fn winner(&self) -> Option<Marker> {
        match self {
            Outcome::Win { marker, .. } => Some(*marker),
            _ => None,
        }
    }

    /// The winning line, if any.
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => f.write_str("in progress"),
            Outcome::Win { marker, line } => write!(f, "{} wins ({})", marker, line),
            Outcome::Draw => f.write_str("draw"),
        }
    }
}
