//! Error types for throw intake, the turn engine and settings loading.

use thiserror::Error;

/// A throw that cannot be recorded against the current frame.
///
/// Rejecting a throw never changes player or frame state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidThrowError {
    /// Not a whole number of pins between 0 and a full rack
    #[error("Pin count out of range: {pins} (expected 0-10)")]
    OutOfRange { pins: i32 },

    /// More pins reported than were standing on the rack
    #[error("Knocked {pins} pins but only {standing} were standing")]
    ExceedsStanding { pins: u8, standing: u8 },

    /// The frame already has all of its throws
    #[error("Frame {frame} is already complete")]
    FrameComplete { frame: usize },
}

/// Turn engine errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Settled pin count rejected
    #[error("Invalid throw: {0}")]
    InvalidThrow(#[from] InvalidThrowError),

    /// A throw is already rolling and has not settled yet
    #[error("A throw is already in flight")]
    ThrowInFlight,

    /// Settled event arrived without a launched throw
    #[error("No throw in flight")]
    NoThrowInFlight,

    /// Every game of the series has been played
    #[error("Series is complete")]
    SeriesComplete,
}

/// Result type for turn engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Settings errors
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Mode name not recognised
    #[error("Unknown game mode: {0}")]
    UnknownMode(String),

    /// A series needs at least one game
    #[error("Series length must be at least 1 game")]
    NoGames,

    /// Name override doesn't match the mode
    #[error("{mode} needs {expected} player names, got {got}")]
    PlayerCount {
        mode: &'static str,
        expected: usize,
        got: usize,
    },

    /// Malformed settings file
    #[error("Invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings file could not be read
    #[error("Failed to read settings: {0}")]
    Io(#[from] std::io::Error),
}
