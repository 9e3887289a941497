//! Tic-tac-toe in the terminal.

#![warn(missing_docs)]

mod cli;
mod terminal;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_engine::{Board, Marker, Outcome, evaluate, select_move};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.session_config().context("Failed to load session config")?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            info!(?config, "Starting terminal game");
            terminal::run(config).await
        }
        Command::BestMove { board, for_marker } => best_move(&board, for_marker),
    }
}

/// Prints the computer's move for a board given on the command line.
#[instrument]
fn best_move(cells: &str, for_marker: Option<Marker>) -> Result<()> {
    let Some(board) = Board::parse(cells) else {
        bail!("Board must be nine cells of X, O or '.', got {cells:?}");
    };

    let outcome = evaluate(&board);
    if outcome != Outcome::InProgress {
        println!("{board}\n\nNo move: {outcome}");
        return Ok(());
    }

    // X opens unless told otherwise
    let marker = for_marker.unwrap_or_else(|| {
        if board.count(Marker::X) > board.count(Marker::O) {
            Marker::O
        } else {
            Marker::X
        }
    });

    let pos = select_move(&board, marker).context("Move selection failed")?;
    let (row, col) = pos.coords();
    println!("{board}\n\n{marker} plays {pos} (row {row}, col {col})");
    Ok(())
}
