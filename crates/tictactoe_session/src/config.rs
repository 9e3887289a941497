//! Session configuration.

use crate::mode::OpponentMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tictactoe_engine::Marker;
use tracing::{debug, info, instrument};

/// Settings for a game session.
///
/// Every field has a default, so an empty TOML file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct SessionConfig {
    /// How long the computer "thinks" before its move lands, in milliseconds.
    think_delay_ms: u64,

    /// Computer or human opponent.
    mode: OpponentMode,

    /// Marker used by the human in computer mode.
    human_marker: Marker,

    /// Marker that moves first in a new game.
    first: Marker,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            think_delay_ms: 500,
            mode: OpponentMode::Computer,
            human_marker: Marker::X,
            first: Marker::X,
        }
    }
}

impl SessionConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, first = %config.first, "Config loaded successfully");
        Ok(config)
    }

    /// The computer's marker in computer mode.
    pub fn computer_marker(&self) -> Marker {
        self.human_marker.opponent()
    }

    /// The think delay as a [`Duration`].
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
