//! Opponent mode selection.

use serde::{Deserialize, Serialize};

/// Who plays against the human at the keyboard.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OpponentMode {
    /// The move selector answers every human move.
    #[default]
    Computer,
    /// Two humans share the keyboard.
    Human,
}

impl OpponentMode {
    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            OpponentMode::Computer => "Human vs Computer",
            OpponentMode::Human => "Human vs Human",
        }
    }
}
