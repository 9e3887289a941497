//! Tests for turn-taking sessions.

use tictactoe_engine::{Board, Marker, Outcome, Position};
use tictactoe_session::invariants::{InvariantSet, SessionInvariants};
use tictactoe_session::{GameSession, MoveError, OpponentMode, SessionConfig};

fn two_player() -> GameSession {
    GameSession::new(&SessionConfig::default().with_mode(OpponentMode::Human))
}

#[test]
fn test_two_player_game_to_draw() {
    let mut session = two_player();
    // X O X / X O O / O X X
    let moves = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::Center,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ];
    for (i, pos) in moves.iter().enumerate() {
        let outcome = session.play(*pos).expect("legal move");
        if i < moves.len() - 1 {
            assert_eq!(outcome, Outcome::InProgress, "after move {i}");
        } else {
            assert_eq!(outcome, Outcome::Draw);
        }
    }
    assert_eq!(session.history().len(), 9);
    assert!(SessionInvariants::check_all(&session).is_ok());
}

#[test]
fn test_computer_never_loses_to_scripted_human() {
    let mut session = GameSession::new(&SessionConfig::default());

    // The human always takes the first empty square.
    while !session.outcome().is_terminal() {
        if session.is_computer_turn() {
            session.play_computer().expect("legal").expect("computer to move");
        } else {
            let pos = session
                .board()
                .empty_positions()
                .next()
                .expect("in-progress board has an empty square");
            session.play(pos).expect("legal move");
        }
    }

    assert_ne!(session.outcome().winner(), Some(Marker::X));
}

#[test]
fn test_human_playing_o_waits_for_computer_opening() {
    let config = SessionConfig::default().with_human_marker(Marker::O);
    let mut session = GameSession::new(&config);

    assert!(session.is_computer_turn());
    assert_eq!(
        session.play(Position::Center),
        Err(MoveError::NotYourTurn(Marker::X))
    );

    let opening = session.play_computer().expect("legal").expect("computer to move");
    assert_eq!(opening.marker, Marker::X);
    assert_eq!(opening.position, Position::TopLeft);
    session.play(Position::Center).expect("human replies");
}

#[test]
fn test_reset_switches_mode_and_opener() {
    let mut session = GameSession::new(&SessionConfig::default());
    session.play(Position::Center).expect("legal move");
    let generation = session.generation();

    session.reset(Marker::O, OpponentMode::Human);
    assert_eq!(session.generation(), generation + 1);
    assert_eq!(session.board(), Board::new());
    assert_eq!(session.current(), Marker::O);
    assert_eq!(session.mode(), OpponentMode::Human);
    assert_eq!(session.outcome(), Outcome::InProgress);
    assert!(!session.is_computer_turn());
}

#[test]
fn test_board_snapshot_is_detached() {
    let mut session = two_player();
    let snapshot = session.board();
    session.play(Position::Center).expect("legal move");
    assert_eq!(snapshot, Board::new());
    assert_ne!(session.board(), snapshot);
}
