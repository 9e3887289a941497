//! Alternating turn invariant: markers alternate starting with the opener.

use super::Invariant;
use crate::GameSession;

/// Invariant: markers alternate turns.
///
/// The history starts with the session's first marker, never repeats a
/// marker twice in a row, and the marker to move is the one after the last
/// move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        let Some(first) = history.first() else {
            return session.current() == session.first();
        };

        if first.marker != session.first() {
            return false;
        }

        if history.windows(2).any(|w| w[0].marker == w[1].marker) {
            return false;
        }

        history
            .last()
            .is_some_and(|last| last.marker.opponent() == session.current())
    }

    fn description() -> &'static str {
        "Markers alternate turns"
    }
}
