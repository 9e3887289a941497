//! Tic-tac-toe engine.
//!
//! Two pure components over a [`Board`] snapshot:
//!
//! - **Evaluator**: [`evaluate`] classifies a board as won (with the
//!   winning [`Line`]), drawn or still in progress.
//! - **Move selector**: [`select_move`] runs an exhaustive minimax search
//!   and returns the optimal [`Position`] for the computer's [`Marker`].
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{evaluate, select_move, Board, Marker, Outcome, Position};
//!
//! let board = Board::parse("XX. OO. ...").unwrap();
//! assert_eq!(evaluate(&board), Outcome::InProgress);
//! assert_eq!(select_move(&board, Marker::X), Ok(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod line;
mod outcome;
mod position;
pub mod rules;
pub mod search;
mod types;

pub use error::SearchError;
pub use line::Line;
pub use outcome::Outcome;
pub use position::Position;
pub use rules::evaluate;
pub use search::{score, select_move};
pub use types::{Board, Marker, Square};
