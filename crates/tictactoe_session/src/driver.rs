//! Drives a session from an async front end.
//!
//! The driver owns the [`GameSession`] behind a mutex and schedules the
//! computer's reply on the tokio runtime after the configured think delay.
//! A scheduled reply carries the [`ComputerTurn`] ticket taken when it was
//! scheduled. The search runs on the blocking pool without the session lock;
//! if the session is reset in the meantime the ticket no longer redeems and
//! the reply is dropped.

use crate::action::{Move, MoveError};
use crate::config::SessionConfig;
use crate::mode::OpponentMode;
use crate::session::{ComputerMove, ComputerTurn, GameSession};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tictactoe_engine::{Board, Marker, Outcome, Position};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument};

/// Messages sent from the driver to the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new game started.
    Reset {
        /// Marker that moves first.
        first: Marker,
        /// Opponent mode of the new game.
        mode: OpponentMode,
    },
    /// Board snapshot after a change.
    BoardChanged {
        /// The board.
        board: Board,
        /// Marker to move next.
        to_move: Marker,
    },
    /// The computer's reply is scheduled.
    ComputerThinking {
        /// The computer's marker.
        marker: Marker,
    },
    /// A move landed.
    MoveMade(Move),
    /// The game ended.
    GameOver(Outcome),
    /// A human move was refused; the session is unchanged.
    Rejected(MoveError),
    /// A scheduled computer reply was dropped because the game moved on.
    StaleMoveDiscarded {
        /// Generation the reply was scheduled in.
        generation: u64,
    },
}

/// Async front for a [`GameSession`].
///
/// Cloning the driver shares the session. Methods that may schedule a
/// computer reply must be called from within a tokio runtime.
#[derive(Debug, Clone)]
pub struct SessionDriver {
    session: Arc<Mutex<GameSession>>,
    pending: Arc<Mutex<Option<JoinHandle<()>>>>,
    think_delay: Duration,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl SessionDriver {
    /// Creates a driver and the channel its events arrive on.
    #[instrument(skip(config))]
    pub fn new(config: &SessionConfig) -> (Self, mpsc::UnboundedReceiver<GameEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let driver = Self {
            session: Arc::new(Mutex::new(GameSession::new(config))),
            pending: Arc::new(Mutex::new(None)),
            think_delay: config.think_delay(),
            event_tx,
        };
        (driver, event_rx)
    }

    /// Announces the opening board and schedules the computer's first move
    /// if it opens.
    #[instrument(skip(self))]
    pub fn start(&self) {
        let session = self.lock_session();
        self.emit(GameEvent::Reset {
            first: session.first(),
            mode: session.mode(),
        });
        self.emit_board(&session);
        self.schedule_computer(&session);
    }

    /// Submits a human move.
    ///
    /// A refused move is reported as [`GameEvent::Rejected`] as well as
    /// returned.
    #[instrument(skip(self))]
    pub fn submit(&self, pos: Position) -> Result<Outcome, MoveError> {
        let mut session = self.lock_session();
        let marker = session.current();

        let outcome = match session.play(pos) {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(error = %e, "Human move rejected");
                self.emit(GameEvent::Rejected(e));
                return Err(e);
            }
        };

        self.emit(GameEvent::MoveMade(Move::new(marker, pos)));
        self.emit_after_move(&session);
        self.schedule_computer(&session);
        Ok(outcome)
    }

    /// Starts a new game, dropping any scheduled computer reply.
    #[instrument(skip(self))]
    pub fn reset(&self, first: Marker, mode: OpponentMode) {
        self.cancel_pending();

        let mut session = self.lock_session();
        session.reset(first, mode);
        self.emit(GameEvent::Reset { first, mode });
        self.emit_board(&session);
        self.schedule_computer(&session);
    }

    /// A copy of the session as it is now.
    pub fn snapshot(&self) -> GameSession {
        self.lock_session().clone()
    }

    /// True while a computer reply is scheduled and has not landed.
    pub fn is_thinking(&self) -> bool {
        self.lock_pending()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn schedule_computer(&self, session: &GameSession) {
        let Some(turn) = session.pending_computer_turn() else {
            return;
        };

        self.emit(GameEvent::ComputerThinking {
            marker: session.computer_marker(),
        });

        let driver = self.clone();
        let delay = self.think_delay;
        debug!(generation = turn.generation(), ?delay, "Scheduling computer move");

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            driver.run_computer_turn(turn).await;
        });

        if let Some(previous) = self.lock_pending().replace(handle) {
            previous.abort();
        }
    }

    async fn run_computer_turn(&self, turn: ComputerTurn) {
        let selected = tokio::task::spawn_blocking(move || turn.select()).await;
        match selected {
            Ok(Ok(computer_move)) => self.finish_computer_turn(turn, computer_move),
            Ok(Err(e)) => {
                error!(error = %e, generation = turn.generation(), "Computer asked to move on a finished board");
            }
            Err(e) => {
                error!(error = %e, generation = turn.generation(), "Computer move search did not complete");
            }
        }
    }

    fn finish_computer_turn(&self, turn: ComputerTurn, computer_move: ComputerMove) {
        let mut session = self.lock_session();
        match session.apply_computer_move(computer_move) {
            Some(mov) => {
                info!(%mov, "Computer moved");
                self.emit(GameEvent::MoveMade(mov));
                self.emit_after_move(&session);
            }
            None => {
                self.emit(GameEvent::StaleMoveDiscarded {
                    generation: turn.generation(),
                });
            }
        }
    }

    fn cancel_pending(&self) {
        if let Some(handle) = self.lock_pending().take() {
            debug!("Cancelling scheduled computer move");
            handle.abort();
        }
    }

    fn emit_after_move(&self, session: &GameSession) {
        self.emit_board(session);
        let outcome = session.outcome();
        if outcome.is_terminal() {
            info!(%outcome, "Game over");
            self.emit(GameEvent::GameOver(outcome));
        }
    }

    fn emit_board(&self, session: &GameSession) {
        self.emit(GameEvent::BoardChanged {
            board: session.board(),
            to_move: session.current(),
        });
    }

    fn emit(&self, event: GameEvent) {
        if self.event_tx.send(event).is_err() {
            debug!("Event receiver dropped");
        }
    }

    fn lock_session(&self) -> MutexGuard<'_, GameSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
