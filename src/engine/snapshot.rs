//! Read-only view of the engine for the scoreboard and lane renderer

use serde::{Deserialize, Serialize};

use super::state::{EnginePhase, EngineState, Transition};
use crate::consts::TENTH_FRAME;
use crate::score::{Frame, Player};

/// One frame box on the scoreboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameView {
    /// Frame number (1-based)
    pub number: usize,
    pub throws: Vec<u8>,
    /// Display marks, one per slot (`' '` for balls not yet thrown)
    pub marks: Vec<char>,
    pub is_strike: bool,
    pub is_spare: bool,
    pub score: Option<u16>,
    /// Frame currently receiving throws
    pub active: bool,
}

impl FrameView {
    fn new(index: usize, frame: &Frame, active: bool) -> Self {
        let is_tenth = index == TENTH_FRAME;
        let mut marks = frame.marks(is_tenth);
        marks.resize(Frame::slot_count(is_tenth), ' ');
        Self {
            number: index + 1,
            throws: frame.throws().to_vec(),
            marks,
            is_strike: frame.is_strike(),
            is_spare: frame.is_spare(),
            score: frame.score(),
            active,
        }
    }
}

/// One bowler's scoreboard line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub name: String,
    pub frames: Vec<FrameView>,
    pub total_score: u16,
    pub running_score: u16,
    /// Current frame (1-based)
    pub current_frame: usize,
    /// Next ball in the current frame (1-based)
    pub current_ball: usize,
    pub turn_over: bool,
    pub game_scores: Vec<u16>,
    pub average: f32,
}

impl PlayerView {
    fn new(player: &Player, is_current: bool) -> Self {
        let frames = player
            .frames()
            .iter()
            .enumerate()
            .map(|(i, f)| {
                let active = is_current && !player.is_turn_over() && i == player.current_frame();
                FrameView::new(i, f, active)
            })
            .collect();

        Self {
            name: player.name.clone(),
            frames,
            total_score: player.total_score(),
            running_score: player.running_score(),
            current_frame: player.current_frame() + 1,
            current_ball: player.current_ball() + 1,
            turn_over: player.is_turn_over(),
            game_scores: player.game_scores().to_vec(),
            average: player.average(),
        }
    }
}

/// Everything the front end needs to draw the current state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub players: Vec<PlayerView>,
    pub current_player: usize,
    pub game_number: u32,
    pub max_games: u32,
    pub phase: EnginePhase,
    pub pins_down: u8,
    pub turn_just_ended: bool,
    pub game_just_ended: bool,
    pub series_complete: bool,
}

impl EngineSnapshot {
    pub fn from_state(state: &EngineState) -> Self {
        let players = state
            .players
            .iter()
            .enumerate()
            .map(|(i, p)| PlayerView::new(p, i == state.current_player))
            .collect();

        let transition = state.last_transition;
        Self {
            players,
            current_player: state.current_player,
            game_number: state.game_number,
            max_games: state.max_games,
            phase: state.phase,
            pins_down: state.pins_down,
            turn_just_ended: transition != Transition::None,
            game_just_ended: matches!(transition, Transition::GameEnded | Transition::SeriesEnded),
            series_complete: state.phase == EnginePhase::SeriesComplete,
        }
    }

    pub fn current(&self) -> &PlayerView {
        &self.players[self.current_player]
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
