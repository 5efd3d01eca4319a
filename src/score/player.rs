//! A bowler's ten frames and the cumulative scoring algorithm

use serde::{Deserialize, Serialize};

use super::frame::{Frame, FrameStatus};
use crate::consts::*;
use crate::error::InvalidThrowError;

/// What a recorded throw did to the player's game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrowOutcome {
    /// Frame that received the throw (0-based)
    pub frame_index: usize,
    /// Ball within that frame (0-based)
    pub ball_index: usize,
    pub pins: u8,
    /// Frame status after the throw
    pub status: FrameStatus,
    pub strike: bool,
    pub spare: bool,
    /// Tenth frame is complete, the player is done for this game
    pub turn_over: bool,
}

impl ThrowOutcome {
    pub fn frame_complete(&self) -> bool {
        self.status.is_complete()
    }
}

/// A bowler in the series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    frames: [Frame; FRAMES_PER_GAME],
    /// Frame receiving throws (0-based); only moves forward within a game
    current_frame: usize,
    /// Totals of completed games in the series
    game_scores: Vec<u16>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frames: Default::default(),
            current_frame: 0,
            game_scores: Vec::new(),
        }
    }

    /// Clear frames for a new game; completed game totals are kept
    pub fn reset(&mut self) {
        self.frames = Default::default();
        self.current_frame = 0;
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Ball about to be thrown in the current frame (0-based)
    pub fn current_ball(&self) -> usize {
        let frame = &self.frames[self.current_frame];
        let max = Frame::slot_count(self.current_frame == TENTH_FRAME) - 1;
        frame.throws().len().min(max)
    }

    pub fn game_scores(&self) -> &[u16] {
        &self.game_scores
    }

    pub fn is_frame_complete(&self, index: usize) -> bool {
        self.frames
            .get(index)
            .is_some_and(|f| f.is_complete(index == TENTH_FRAME))
    }

    /// Player has finished all ten frames of the current game
    pub fn is_turn_over(&self) -> bool {
        self.is_frame_complete(TENTH_FRAME)
    }

    /// Record a settled throw against the current frame.
    ///
    /// Advances the current frame when frames 1-9 close and recomputes
    /// every determinable score. Invalid input leaves the player unchanged.
    pub fn record_throw(&mut self, pins: u8) -> Result<ThrowOutcome, InvalidThrowError> {
        let frame_index = self.current_frame;
        let is_tenth = frame_index == TENTH_FRAME;
        let frame = &mut self.frames[frame_index];
        let ball_index = frame.throws().len();

        let status = frame.record(pins, frame_index, is_tenth)?;
        let strike = ball_index == 0 && frame.is_strike();
        let spare = ball_index == 1 && frame.is_spare();

        if status.is_complete() && !is_tenth {
            self.current_frame += 1;
        }

        self.calculate_scores();

        Ok(ThrowOutcome {
            frame_index,
            ball_index,
            pins,
            status,
            strike,
            spare,
            turn_over: is_tenth && status.is_complete(),
        })
    }

    /// Fill in every frame score that has become determinable.
    ///
    /// Scores are write-once and filled left to right: a frame is only scored
    /// once its predecessor's running total is known.
    pub fn calculate_scores(&mut self) {
        for i in 0..FRAMES_PER_GAME {
            if self.frames[i].score().is_some() {
                continue;
            }

            let previous = match i {
                0 => 0,
                _ => match self.frames[i - 1].score() {
                    Some(score) => score,
                    None => break,
                },
            };

            match self.frame_value(i) {
                Some(value) => self.frames[i].set_score(previous + value),
                None => break,
            }
        }
    }

    /// Points earned by frame `i` itself, including strike/spare bonus
    fn frame_value(&self, i: usize) -> Option<u16> {
        let frame = &self.frames[i];

        if i == TENTH_FRAME {
            return frame.is_complete(true).then(|| frame.pin_total());
        }

        if frame.is_strike() {
            self.bonus_throws(i, 2).map(|bonus| PINS_PER_RACK as u16 + bonus)
        } else if frame.is_spare() {
            self.bonus_throws(i, 1).map(|bonus| PINS_PER_RACK as u16 + bonus)
        } else if frame.throws().len() == 2 {
            Some(frame.pin_total())
        } else {
            None
        }
    }

    /// Sum of the next `count` throws after frame `i`, if they have been thrown
    fn bonus_throws(&self, i: usize, count: usize) -> Option<u16> {
        let next: Vec<u8> = self.frames[i + 1..]
            .iter()
            .flat_map(|f| f.throws().iter().copied())
            .take(count)
            .collect();

        (next.len() == count).then(|| next.iter().map(|&p| p as u16).sum())
    }

    /// Final game score: the tenth frame's total, 0 until it is known
    pub fn total_score(&self) -> u16 {
        self.frames[TENTH_FRAME].score().unwrap_or(0)
    }

    /// Latest determined running total (live scoreboard value)
    pub fn running_score(&self) -> u16 {
        self.frames
            .iter()
            .rev()
            .find_map(|f| f.score())
            .unwrap_or(0)
    }

    /// Store the current game total in the series record
    pub fn record_game(&mut self) -> u16 {
        let total = self.total_score();
        self.game_scores.push(total);
        total
    }

    /// Mean of completed game totals (0 when none)
    pub fn average(&self) -> f32 {
        if self.game_scores.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.game_scores.iter().map(|&s| s as u32).sum();
        sum as f32 / self.game_scores.len() as f32
    }

    /// Best completed game
    pub fn high_game(&self) -> Option<u16> {
        self.game_scores.iter().copied().max()
    }
}
