//! Turn-taking game session.
//!
//! [`GameSession`] owns the authoritative board and decides whose turn it
//! is. It is synchronous; [`SessionDriver`](crate::SessionDriver) adds the
//! delayed computer move on top.

use crate::action::{Move, MoveError};
use crate::config::SessionConfig;
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::mode::OpponentMode;
use tictactoe_engine::{
    Board, Marker, Outcome, Position, SearchError, Square, evaluate, select_move,
};
use tracing::{debug, error, info, instrument, warn};

/// A claim on the computer's next move.
///
/// Taken when the computer's turn begins. The ticket carries a copy of the
/// board, so [`ComputerTurn::select`] can run the search without access to
/// the session. The resulting [`ComputerMove`] only applies against the same
/// game generation and the same board the ticket was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerTurn {
    generation: u64,
    board: Board,
    marker: Marker,
}

impl ComputerTurn {
    /// Generation the ticket was issued in.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Runs the move selector on the ticket's board.
    ///
    /// # Errors
    ///
    /// A [`SearchError`] when the ticket's board has no move to make.
    /// Tickets are only issued for games in progress, so this points at a
    /// bug in the turn bookkeeping.
    #[instrument(skip(self), fields(generation = self.generation, marker = %self.marker))]
    pub fn select(self) -> Result<ComputerMove, SearchError> {
        let position = select_move(&self.board, self.marker)?;
        Ok(ComputerMove {
            turn: self,
            position,
        })
    }
}

/// The selector's answer to a [`ComputerTurn`], ready to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerMove {
    turn: ComputerTurn,
    position: Position,
}

impl ComputerMove {
    /// Where the computer wants to play.
    pub fn position(&self) -> Position {
        self.position
    }
}

/// A single game of tic-tac-toe between a human and a computer or two humans.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) current: Marker,
    outcome: Outcome,
    mode: OpponentMode,
    computer: Marker,
    first: Marker,
    history: Vec<Move>,
    generation: u64,
}

impl GameSession {
    /// Creates a session from its configuration.
    #[instrument(skip(config), fields(mode = %config.mode(), first = %config.first()))]
    pub fn new(config: &SessionConfig) -> Self {
        info!("Creating new game session");
        Self {
            board: Board::new(),
            current: *config.first(),
            outcome: Outcome::InProgress,
            mode: *config.mode(),
            computer: config.computer_marker(),
            first: *config.first(),
            history: Vec::new(),
            generation: 0,
        }
    }

    /// Starts a fresh game.
    ///
    /// Bumps the generation, so any [`ComputerTurn`] issued before the reset
    /// is stale.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn reset(&mut self, first: Marker, mode: OpponentMode) {
        self.board = Board::new();
        self.current = first;
        self.first = first;
        self.mode = mode;
        self.outcome = Outcome::InProgress;
        self.history.clear();
        self.generation += 1;
        info!(generation = self.generation, "Session reset");
    }

    /// Places the current marker for a human player.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the game has ended,
    /// [`MoveError::NotYourTurn`] while the computer holds the turn and
    /// [`MoveError::SquareOccupied`] for a taken square. The session is
    /// unchanged in every case.
    #[instrument(skip(self), fields(generation = self.generation, marker = %self.current))]
    pub fn play(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        if self.outcome.is_terminal() {
            debug!("Move after game over ignored");
            return Err(MoveError::GameOver);
        }

        if self.is_computer_turn() {
            debug!("Human move during computer turn ignored");
            return Err(MoveError::NotYourTurn(self.current));
        }

        if !self.board.is_empty(pos) {
            debug!(position = %pos, "Move on occupied square ignored");
            return Err(MoveError::SquareOccupied(pos));
        }

        self.apply(pos);
        Ok(self.outcome)
    }

    /// Issues a ticket for the computer's move, if the computer is to move.
    pub fn pending_computer_turn(&self) -> Option<ComputerTurn> {
        self.is_computer_turn().then_some(ComputerTurn {
            generation: self.generation,
            board: self.board,
            marker: self.computer,
        })
    }

    /// Runs the move selector and applies its move.
    ///
    /// Returns `Ok(None)` without searching or touching the board when the
    /// ticket is stale: the session was reset or the board changed since it
    /// was issued.
    ///
    /// # Errors
    ///
    /// A [`SearchError`] means the selector was asked to move on a finished
    /// board. That is a bug in the turn bookkeeping: debug builds panic,
    /// release builds log it and leave the session unchanged.
    #[instrument(skip(self, turn), fields(ticket = turn.generation, generation = self.generation))]
    pub fn complete_computer_turn(
        &mut self,
        turn: ComputerTurn,
    ) -> Result<Option<Move>, SearchError> {
        if !self.redeemable(&turn) {
            return Ok(None);
        }

        let selected = turn.select();
        debug_assert!(
            selected.is_ok(),
            "move selector called without a legal move: {:?}",
            selected
        );
        let computer_move = selected.inspect_err(|e| {
            error!(error = %e, board = %self.board, "Move selector called without a legal move");
        })?;

        Ok(self.apply_computer_move(computer_move))
    }

    /// Applies a move the selector chose for an earlier ticket.
    ///
    /// Returns `None` without touching the board when the ticket is stale.
    #[instrument(skip(self, computer_move), fields(
        ticket = computer_move.turn.generation,
        generation = self.generation,
        position = %computer_move.position,
    ))]
    pub fn apply_computer_move(&mut self, computer_move: ComputerMove) -> Option<Move> {
        if !self.redeemable(&computer_move.turn) {
            return None;
        }
        Some(self.apply(computer_move.position))
    }

    /// Takes and immediately redeems the computer's turn.
    ///
    /// Returns `Ok(None)` when it is not the computer's turn.
    pub fn play_computer(&mut self) -> Result<Option<Move>, SearchError> {
        match self.pending_computer_turn() {
            Some(turn) => self.complete_computer_turn(turn),
            None => Ok(None),
        }
    }

    /// True when the game is running in computer mode and the computer is
    /// to move.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == OpponentMode::Computer
            && self.current == self.computer
            && !self.outcome.is_terminal()
    }

    /// A copy of the board.
    pub fn board(&self) -> Board {
        self.board
    }

    /// The marker to move next.
    pub fn current(&self) -> Marker {
        self.current
    }

    /// The marker that opened this game.
    pub fn first(&self) -> Marker {
        self.first
    }

    /// The current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The opponent mode.
    pub fn mode(&self) -> OpponentMode {
        self.mode
    }

    /// The computer's marker (meaningful in computer mode).
    pub fn computer_marker(&self) -> Marker {
        self.computer
    }

    /// Moves played this game, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of resets since the session was created.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn redeemable(&self, turn: &ComputerTurn) -> bool {
        if turn.generation != self.generation || turn.board != self.board {
            debug!("Discarding stale computer turn");
            return false;
        }
        if !self.is_computer_turn() || turn.marker != self.computer {
            warn!("Computer turn redeemed when it is not the computer's turn");
            return false;
        }
        true
    }

    fn apply(&mut self, pos: Position) -> Move {
        let mov = Move::new(self.current, pos);
        self.board.set(pos, Square::Occupied(self.current));
        self.history.push(mov);
        self.current = self.current.opponent();
        self.outcome = evaluate(&self.board);

        if let Err(violations) = SessionInvariants::check_all(self) {
            error!(?violations, "Session invariant violated");
            debug_assert!(violations.is_empty(), "session invariants violated: {violations:?}");
        }

        info!(
            marker = %mov.marker,
            position = %mov.position,
            outcome = %self.outcome,
            "Move applied"
        );
        mov
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn computer_session() -> GameSession {
        GameSession::new(&SessionConfig::default())
    }

    #[test]
    fn test_turn_alternates_on_valid_move() {
        let mut session =
            GameSession::new(&SessionConfig::default().with_mode(OpponentMode::Human));
        assert_eq!(session.current(), Marker::X);
        session.play(Position::Center).expect("legal");
        assert_eq!(session.current(), Marker::O);
    }

    #[test]
    fn test_occupied_square_is_a_no_op() {
        let mut session =
            GameSession::new(&SessionConfig::default().with_mode(OpponentMode::Human));
        session.play(Position::Center).expect("legal");
        let before = session.board();

        assert_eq!(
            session.play(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(session.board(), before);
        assert_eq!(session.current(), Marker::O);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_human_cannot_move_for_computer() {
        let mut session = computer_session();
        session.play(Position::Center).expect("legal");
        assert!(session.is_computer_turn());
        assert_eq!(
            session.play(Position::TopLeft),
            Err(MoveError::NotYourTurn(Marker::O))
        );
    }

    #[test]
    fn test_computer_answers_center_with_corner() {
        let mut session = computer_session();
        session.play(Position::Center).expect("legal");
        let mov = session.play_computer().expect("legal").expect("computer to move");
        assert_eq!(mov, Move::new(Marker::O, Position::TopLeft));
        assert_eq!(session.current(), Marker::X);
        assert!(session.pending_computer_turn().is_none());
    }

    #[test]
    fn test_ticket_from_before_reset_is_stale() {
        let mut session = computer_session();
        session.play(Position::Center).expect("legal");
        let ticket = session.pending_computer_turn().expect("computer to move");

        session.reset(Marker::X, OpponentMode::Computer);
        assert_eq!(session.complete_computer_turn(ticket), Ok(None));
        assert_eq!(session.board(), Board::new());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_ticket_for_other_board_is_stale() {
        let mut session = computer_session();
        session.play(Position::Center).expect("legal");
        let ticket = session.pending_computer_turn().expect("computer to move");

        // Same generation, but the game was replayed to a different board.
        session.reset(Marker::X, OpponentMode::Computer);
        session.generation = ticket.generation();
        session.play(Position::TopLeft).expect("legal");

        assert_eq!(session.complete_computer_turn(ticket), Ok(None));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_selected_move_applies_only_to_its_board() {
        let mut session = computer_session();
        session.play(Position::Center).expect("legal");
        let ticket = session.pending_computer_turn().expect("computer to move");

        // The search needs only the ticket, not the session.
        let chosen = ticket.select().expect("game in progress");
        assert_eq!(chosen.position(), Position::TopLeft);
        assert_eq!(session.history().len(), 1);

        let mut replayed = session.clone();
        assert_eq!(
            session.apply_computer_move(chosen),
            Some(Move::new(Marker::O, Position::TopLeft))
        );
        // A second application finds the board moved on.
        assert_eq!(session.apply_computer_move(chosen), None);

        replayed.reset(Marker::X, OpponentMode::Computer);
        assert_eq!(replayed.apply_computer_move(chosen), None);
        assert_eq!(replayed.board(), Board::new());
    }

    #[test]
    fn test_moves_after_win_are_rejected() {
        let mut session =
            GameSession::new(&SessionConfig::default().with_mode(OpponentMode::Human));
        // X X . / O O . / . . .
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
        ] {
            session.play(pos).expect("legal");
        }

        let outcome = session.play(Position::TopRight).expect("legal");
        assert_eq!(outcome.winner(), Some(Marker::X));
        assert_eq!(
            outcome.line().map(|l| l.coords()),
            Some([(0, 0), (0, 1), (0, 2)])
        );
        assert_eq!(session.play(Position::MiddleRight), Err(MoveError::GameOver));
        assert!(session.pending_computer_turn().is_none());
    }

    #[test]
    fn test_computer_opens_when_it_moves_first() {
        let mut session = computer_session();
        session.reset(Marker::O, OpponentMode::Computer);
        assert!(session.is_computer_turn());
        let mov = session.play_computer().expect("legal").expect("computer to move");
        assert_eq!(mov, Move::new(Marker::O, Position::TopLeft));
    }

    #[test]
    fn test_human_mode_never_issues_tickets() {
        let mut session =
            GameSession::new(&SessionConfig::default().with_mode(OpponentMode::Human));
        session.play(Position::Center).expect("legal");
        assert!(session.pending_computer_turn().is_none());
        assert_eq!(session.play_computer(), Ok(None));
    }
}
