//! Series configuration
//!
//! Consumed once when the turn engine is built. Loaded from a JSON file on
//! native targets; the browser front end passes a JSON string.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_MAX_GAMES;
use crate::error::SettingsError;

/// Who is bowling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Singles,
    Doubles,
    Team,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Singles => "Singles",
            GameMode::Doubles => "Doubles",
            GameMode::Team => "Team",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "singles" | "single" | "1" => Some(GameMode::Singles),
            "doubles" | "pair" | "2" => Some(GameMode::Doubles),
            "team" | "4" => Some(GameMode::Team),
            _ => None,
        }
    }

    /// Default bowler names, in throwing order
    pub fn player_names(&self) -> &'static [&'static str] {
        match self {
            GameMode::Singles => &["Player 1"],
            GameMode::Doubles => &["Athlete", "Partner"],
            GameMode::Team => &["Athlete 1", "Athlete 2", "Partner 1", "Partner 2"],
        }
    }

    pub fn player_count(&self) -> usize {
        self.player_names().len()
    }

    /// Summary reports a combined team average
    pub fn is_team_play(&self) -> bool {
        self.player_count() > 1
    }
}

/// Series settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mode: GameMode,
    /// Games in the series
    pub max_games: u32,
    /// Override bowler names (must match the mode's player count)
    pub player_names: Option<Vec<String>>,

    // === Lane collaborator ===
    /// Seed for the lane stand-in and auto bowler
    pub seed: u64,
    /// Auto bowler aim spread (0 = perfect, 1 = wild)
    pub bowler_wildness: f32,
    /// Wait for pins to settle before reporting a throw (ms)
    pub settle_delay_ms: u32,
    /// Pause before resetting pins for the next ball (ms)
    pub reset_delay_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: GameMode::Singles,
            max_games: DEFAULT_MAX_GAMES,
            player_names: None,

            seed: 0x5EED,
            bowler_wildness: 0.35,
            settle_delay_ms: 3000,
            reset_delay_ms: 2000,
        }
    }
}

impl Settings {
    pub fn from_mode(mode: GameMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Parse settings from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.max_games == 0 {
            return Err(SettingsError::NoGames);
        }
        if let Some(names) = &self.player_names {
            if names.len() != self.mode.player_count() {
                return Err(SettingsError::PlayerCount {
                    mode: self.mode.as_str(),
                    expected: self.mode.player_count(),
                    got: names.len(),
                });
            }
        }
        Ok(())
    }

    /// How long the front end lets pins fall before reporting a throw
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms as u64)
    }

    /// How long the front end shows a result before resetting pins
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms as u64)
    }

    /// Bowler names in throwing order
    pub fn names(&self) -> Vec<String> {
        match &self.player_names {
            Some(names) => names.clone(),
            None => self
                .mode
                .player_names()
                .iter()
                .map(|n| n.to_string())
                .collect(),
        }
    }
}
