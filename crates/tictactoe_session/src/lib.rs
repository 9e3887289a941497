//! Game session for the tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Session**: [`GameSession`] owns the board, the turn and the outcome,
//!   and validates human moves.
//! - **Driver**: [`SessionDriver`] delays the computer's reply on the tokio
//!   runtime and discards replies that belong to an earlier game.
//! - **Config**: [`SessionConfig`] loads from TOML and is overridden by the
//!   command line.
//!
//! # Example
//!
//! ```
//! use tictactoe_session::{GameSession, SessionConfig};
//! use tictactoe_engine::{Marker, Position};
//!
//! let mut session = GameSession::new(&SessionConfig::default());
//! session.play(Position::Center).unwrap();
//! let reply = session.play_computer().unwrap().unwrap();
//! assert_eq!(reply.marker, Marker::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod driver;
pub mod invariants;
mod mode;
mod session;

pub use action::{Move, MoveError};
pub use config::{ConfigError, SessionConfig};
pub use driver::{GameEvent, SessionDriver};
pub use mode::OpponentMode;
pub use session::{ComputerMove, ComputerTurn, GameSession};
