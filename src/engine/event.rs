//! Events the engine emits to the lane and scoreboard

use serde::{Deserialize, Serialize};

use crate::summary::SeriesSummary;

/// Banner shown after a throw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Callout {
    Strike,
    Spare,
    Gutter,
    None,
}

impl Callout {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Callout::Strike => Some("STRIKE!"),
            Callout::Spare => Some("SPARE!"),
            Callout::Gutter => Some("Gutter"),
            Callout::None => None,
        }
    }
}

/// A settled throw as recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrowEvent {
    pub player: usize,
    pub player_name: String,
    /// Frame number (1-based)
    pub frame: usize,
    /// Ball within the frame (1-based)
    pub ball: usize,
    pub pins: u8,
    pub callout: Callout,
}

/// What happens to the pins before the next ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RackReset {
    /// Sweep away only the pins knocked down, same rack
    Partial,
    /// Set a full rack of ten
    Full,
}

/// Lane reset before the next ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetDirective {
    pub rack: RackReset,
    /// Ball returns to the foul line
    pub reset_ball: bool,
}

impl ResetDirective {
    pub fn partial() -> Self {
        Self {
            rack: RackReset::Partial,
            reset_ball: true,
        }
    }

    pub fn full() -> Self {
        Self {
            rack: RackReset::Full,
            reset_ball: true,
        }
    }
}

/// Turn passes to another bowler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnAdvance {
    pub from: usize,
    pub to: usize,
    pub next_name: String,
    /// Game the next bowler is starting (1-based)
    pub game_number: u32,
}

/// All bowlers finished a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameComplete {
    pub game_number: u32,
    /// Final totals in seating order
    pub scores: Vec<u16>,
}

/// Everything the engine reports after a throw, in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineEvent {
    Throw(ThrowEvent),
    Reset(ResetDirective),
    TurnAdvance(TurnAdvance),
    GameComplete(GameComplete),
    SeriesComplete(SeriesSummary),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callout_messages() {
        assert_eq!(Callout::Strike.message(), Some("STRIKE!"));
        assert_eq!(Callout::Spare.message(), Some("SPARE!"));
        assert_eq!(Callout::None.message(), None);
    }

    #[test]
    fn test_events_are_tagged() {
        let event = EngineEvent::Reset(ResetDirective::partial());
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "reset");
        assert_eq!(json["rack"], "Partial");
        assert_eq!(json["reset_ball"], true);

        let event = EngineEvent::GameComplete(GameComplete {
            game_number: 2,
            scores: vec![120, 95],
        });
        let json = serde_json::to_string(&event).unwrap();
        let back: EngineEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
