//! Engine state
//!
//! Everything needed to resume a series lives here and is serializable.

use serde::{Deserialize, Serialize};

use crate::score::Player;
use crate::settings::{GameMode, Settings};

/// Where the engine is between events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnginePhase {
    /// Ready for the current player to launch
    AwaitingThrow,
    /// Ball launched, waiting for pins to settle
    ThrowInFlight,
    /// All games bowled
    SeriesComplete,
}

/// Milestone reached by the most recent throw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Transition {
    #[default]
    None,
    /// A player finished their tenth frame
    TurnEnded,
    /// Every player finished the game
    GameEnded,
    /// The last game of the series ended
    SeriesEnded,
}

/// Complete engine state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    pub mode: GameMode,
    /// Throwing order, fixed for the series
    pub players: Vec<Player>,
    /// Whose turn it is
    pub current_player: usize,
    /// Game in progress (1-based)
    pub game_number: u32,
    pub max_games: u32,
    pub phase: EnginePhase,
    /// Pins down on the rack the next ball faces
    pub pins_down: u8,
    pub last_transition: Transition,
}

impl EngineState {
    /// Fresh series for the configured mode
    pub fn new(settings: &Settings) -> Self {
        let players = settings.names().into_iter().map(Player::new).collect();
        Self {
            mode: settings.mode,
            players,
            current_player: 0,
            game_number: 1,
            max_games: settings.max_games,
            phase: EnginePhase::AwaitingThrow,
            pins_down: 0,
            last_transition: Transition::None,
        }
    }

    pub fn player(&self) -> &Player {
        &self.players[self.current_player]
    }

    pub(crate) fn player_mut(&mut self) -> &mut Player {
        &mut self.players[self.current_player]
    }

    pub fn is_last_player(&self) -> bool {
        self.current_player + 1 == self.players.len()
    }

    pub fn is_last_game(&self) -> bool {
        self.game_number >= self.max_games
    }

    pub fn is_series_complete(&self) -> bool {
        self.phase == EnginePhase::SeriesComplete
    }

    /// Games whose totals have been recorded
    pub fn games_recorded(&self) -> u32 {
        self.players
            .first()
            .map_or(0, |p| p.game_scores().len() as u32)
    }
}
