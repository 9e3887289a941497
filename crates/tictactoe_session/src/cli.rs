//! Command-line interface for the tic-tac-toe binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::Marker;
use tictactoe_session::{ConfigError, OpponentMode, SessionConfig};
use tracing::instrument;

/// Tic-tac-toe against an unbeatable computer or a friend
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML session config
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Opponent mode
    #[arg(long, value_enum, global = true)]
    pub mode: Option<OpponentMode>,

    /// Marker the human plays against the computer (X or O)
    #[arg(long, global = true)]
    pub marker: Option<Marker>,

    /// Marker that moves first (X or O)
    #[arg(long, global = true)]
    pub first: Option<Marker>,

    /// Delay before the computer's move lands, in milliseconds
    #[arg(long, global = true)]
    pub think_delay_ms: Option<u64>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play,

    /// Print the computer's move for a board
    BestMove {
        /// Nine cells in row-major order using X, O and `.`, e.g. "XX.OO...."
        board: String,

        /// Marker to move; inferred from the marker counts when omitted
        #[arg(long = "for")]
        for_marker: Option<Marker>,
    },
}

impl Cli {
    /// Loads the config file, if any, and applies command-line overrides.
    #[instrument(skip(self))]
    pub fn session_config(&self) -> Result<SessionConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::from_file(path)?,
            None => SessionConfig::default(),
        };

        if let Some(mode) = self.mode {
            config = config.with_mode(mode);
        }
        if let Some(marker) = self.marker {
            config = config.with_human_marker(marker);
        }
        if let Some(first) = self.first {
            config = config.with_first(first);
        }
        if let Some(ms) = self.think_delay_ms {
            config = config.with_think_delay_ms(ms);
        }
        Ok(config)
    }
}
