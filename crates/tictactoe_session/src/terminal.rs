//! Line-oriented terminal front end.

use anyhow::Result;
use std::ops::ControlFlow;
use tictactoe_engine::{Marker, Outcome, Position};
use tictactoe_session::{GameEvent, MoveError, OpponentMode, SessionConfig, SessionDriver};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, instrument};

/// A line typed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a marker.
    Move(Position),
    /// Start a new game with the current settings.
    Reset,
    /// Switch opponent mode and start a new game.
    Mode(OpponentMode),
    /// Change who opens and start a new game.
    First(Marker),
    /// Print the command list.
    Help,
    /// Leave.
    Quit,
}

impl Input {
    /// Parses one input line. Blank or unknown lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => Some(Input::Quit),
            "r" | "reset" | "new" => Some(Input::Reset),
            "h" | "help" | "?" => Some(Input::Help),
            "mode" => rest.parse().ok().map(Input::Mode),
            "first" => rest.parse().ok().map(Input::First),
            _ => Position::from_label_or_number(line).map(Input::Move),
        }
    }
}

const HELP: &str = "\
Commands:
  1-9 or a label (e.g. \"center\")  place your marker
  reset                            start a new game
  mode computer|human              switch opponent and restart
  first X|O                        choose who opens and restart
  quit                             leave";

/// Plays games on stdin/stdout until the player quits or stdin closes.
#[instrument(skip(config))]
pub async fn run(config: SessionConfig) -> Result<()> {
    let (driver, mut events) = SessionDriver::new(&config);
    let mut first = *config.first();
    let mut mode = *config.mode();

    println!("{HELP}");
    driver.start();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            Some(event) = events.recv() => render(&event),
            line = lines.next_line() => {
                let Some(line) = line? else {
                    info!("Stdin closed");
                    break;
                };
                match Input::parse(&line) {
                    Some(input) => {
                        if dispatch(&driver, input, &mut first, &mut mode).is_break() {
                            break;
                        }
                    }
                    None if line.trim().is_empty() => {}
                    None => {
                        debug!(%line, "Unrecognized input");
                        println!("Unrecognized input. Type \"help\" for commands.");
                    }
                }
            }
        }
    }

    Ok(())
}

/// Applies one parsed input to the driver.
fn dispatch(
    driver: &SessionDriver,
    input: Input,
    first: &mut Marker,
    mode: &mut OpponentMode,
) -> ControlFlow<()> {
    match input {
        Input::Quit => return ControlFlow::Break(()),
        Input::Help => println!("{HELP}"),
        Input::Move(pos) => {
            // Rejections arrive as events.
            if let Err(e) = driver.submit(pos) {
                debug!(error = %e, position = %pos, "Move not applied");
            }
        }
        Input::Reset => driver.reset(*first, *mode),
        Input::Mode(next) => {
            *mode = next;
            driver.reset(*first, *mode);
        }
        Input::First(next) => {
            *first = next;
            driver.reset(*first, *mode);
        }
    }
    ControlFlow::Continue(())
}

fn render(event: &GameEvent) {
    match event {
        GameEvent::Reset { first, mode } => {
            println!("\nNew game: {}, {} moves first", mode.name(), first);
        }
        GameEvent::BoardChanged { board, to_move } => {
            println!("\n{board}\n");
            println!("{to_move} to move");
        }
        GameEvent::ComputerThinking { marker } => println!("Computer ({marker}) is thinking..."),
        GameEvent::MoveMade(mov) => println!("{mov}"),
        GameEvent::GameOver(outcome) => match outcome {
            Outcome::Win { marker, line } => {
                println!("{marker} wins! Line: {line}");
                println!("Type \"reset\" to play again.");
            }
            Outcome::Draw => println!("It's a draw! Type \"reset\" to play again."),
            Outcome::InProgress => {}
        },
        GameEvent::Rejected(MoveError::SquareOccupied(pos)) => {
            println!("{pos} is taken.");
        }
        GameEvent::Rejected(MoveError::NotYourTurn(_)) => println!("Wait for the computer."),
        GameEvent::Rejected(MoveError::GameOver) => {
            println!("The game is over. Type \"reset\" to play again.");
        }
        GameEvent::StaleMoveDiscarded { generation } => {
            debug!(generation, "Stale computer move discarded");
        }
    }
}
