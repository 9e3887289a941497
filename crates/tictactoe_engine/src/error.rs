//! Errors reported by the move selector.

/// The move selector was called on a board with nothing left to decide.
///
/// Both variants mean the caller skipped the evaluator check; a session
/// should only ask for a move while [`evaluate`](crate::evaluate) reports
/// [`Outcome::InProgress`](crate::Outcome::InProgress).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SearchError {
    /// Every square is occupied.
    #[display("No legal move: the board is full")]
    NoLegalMove,
    /// A line is already complete.
    #[display("No legal move: the game is already over")]
    GameOver,
}
