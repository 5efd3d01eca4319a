//! Tenpin - ten-pin bowling scoring and turn engine
//!
//! Core modules:
//! - `score`: Frame and player scoring (strike/spare lookahead, tenth frame rules)
//! - `engine`: Turn engine (busy flag, reset directives, player/game/series rotation)
//! - `summary`: Series summary with averages and standings
//! - `lane`: Deterministic lane stand-in for the physics layer (rack, roll, auto bowler)
//! - `scoreboard`: Plain-text scoreboard rendering
//! - `settings`: Game mode and series configuration

pub mod engine;
pub mod error;
pub mod lane;
pub mod score;
pub mod scoreboard;
pub mod settings;
pub mod summary;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use engine::{EngineSnapshot, TurnEngine};
pub use error::{EngineError, InvalidThrowError, SettingsError};
pub use score::{Frame, Player};
pub use settings::{GameMode, Settings};
pub use summary::SeriesSummary;

/// Game configuration constants
pub mod consts {
    /// Frames in one game
    pub const FRAMES_PER_GAME: usize = 10;
    /// Index of the tenth (terminal) frame
    pub const TENTH_FRAME: usize = FRAMES_PER_GAME - 1;
    /// Pins in a full rack
    pub const PINS_PER_RACK: u8 = 10;
    /// Highest possible score for one game
    pub const PERFECT_GAME: u16 = 300;
    /// Games in a series
    pub const DEFAULT_MAX_GAMES: u32 = 3;

    /// Lane geometry (meters). The foul line is y = 0, x = 0 is the lane center.
    pub const LANE_LENGTH: f32 = 18.29;
    pub const LANE_HALF_WIDTH: f32 = 0.5334;
    /// Head pin sits at the far end of the lane
    pub const HEAD_PIN_DISTANCE: f32 = LANE_LENGTH;
    /// Center-to-center distance between adjacent pins (12 in)
    pub const PIN_SPACING: f32 = 0.3048;
    /// Distance between pin rows (12 in * sqrt(3)/2)
    pub const PIN_ROW_DEPTH: f32 = 0.264;
    pub const PIN_RADIUS: f32 = 0.0605;
    pub const BALL_RADIUS: f32 = 0.108;

    /// Throw speed model: forward = BASE + power * POWER_GAIN, side = sin(aim) * SIDE_GAIN
    pub const BASE_FORWARD_SPEED: f32 = 10.0;
    pub const POWER_GAIN: f32 = 5.0;
    pub const SIDE_GAIN: f32 = 3.0;
    /// Aim limit (radians either side of straight)
    pub const MAX_AIM: f32 = 0.35;
}
