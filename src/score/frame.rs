//! A single frame: its throws, strike/spare flags and cumulative score
//!
//! Frames 1-9 hold at most two throws (one on a strike). The tenth frame can
//! hold three: a strike or spare earns bonus balls, each against a fresh rack.

use serde::{Deserialize, Serialize};

use crate::consts::PINS_PER_RACK;
use crate::error::InvalidThrowError;

/// Convert a pin count reported as a JS number
///
/// Fractional, non-finite and out-of-range values are rejected instead of
/// being narrowed into `0..=10`.
pub fn pins_from_f64(value: f64) -> Result<u8, InvalidThrowError> {
    if value.is_finite() && value.fract() == 0.0 && (0.0..=PINS_PER_RACK as f64).contains(&value) {
        return Ok(value as u8);
    }
    log::warn!("Rejecting reported pin count {value}");
    Err(InvalidThrowError::OutOfRange { pins: value as i32 })
}

/// Where a frame is in its own throw sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameStatus {
    /// No throws yet
    WaitingFirstBall,
    /// One throw recorded, frame not decided
    WaitingSecondBall,
    /// Tenth frame only: strike or spare earned a third ball
    WaitingBonusBall,
    /// Frames 1-9: strike on the first ball closes the frame
    Strike,
    /// All throws for the frame are in
    Complete,
}

impl FrameStatus {
    pub fn is_complete(&self) -> bool {
        matches!(self, FrameStatus::Strike | FrameStatus::Complete)
    }
}

/// Rack the next ball of a frame will face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RackState {
    /// All ten pins set
    Fresh,
    /// Remainder of the previous ball's rack
    Partial { standing: u8 },
}

impl RackState {
    pub fn standing(&self) -> u8 {
        match self {
            RackState::Fresh => PINS_PER_RACK,
            RackState::Partial { standing } => *standing,
        }
    }
}

/// One scoring frame
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    throws: Vec<u8>,
    is_strike: bool,
    is_spare: bool,
    /// Cumulative total through this frame, `None` until determinable
    score: Option<u16>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn throws(&self) -> &[u8] {
        &self.throws
    }

    pub fn is_strike(&self) -> bool {
        self.is_strike
    }

    pub fn is_spare(&self) -> bool {
        self.is_spare
    }

    /// Cumulative score, or `None` while lookahead throws are still missing
    pub fn score(&self) -> Option<u16> {
        self.score
    }

    pub(crate) fn set_score(&mut self, score: u16) {
        debug_assert!(self.score.is_none(), "frame score is write-once");
        self.score = Some(score);
    }

    /// Sum of this frame's own pins
    pub fn pin_total(&self) -> u16 {
        self.throws.iter().map(|&p| p as u16).sum()
    }

    /// Current state of the frame's throw sequence
    pub fn status(&self, is_tenth: bool) -> FrameStatus {
        match (self.throws.len(), is_tenth) {
            (0, _) => FrameStatus::WaitingFirstBall,
            (1, false) if self.is_strike => FrameStatus::Strike,
            (1, _) => FrameStatus::WaitingSecondBall,
            (2, false) => FrameStatus::Complete,
            (2, true) if self.is_strike || self.is_spare => FrameStatus::WaitingBonusBall,
            _ => FrameStatus::Complete,
        }
    }

    pub fn is_complete(&self, is_tenth: bool) -> bool {
        self.status(is_tenth).is_complete()
    }

    /// Rack faced by the throw at `ball` (0-based) of this frame.
    ///
    /// Ball 2 plays out ball 1's rack unless ball 1 was a strike in the tenth;
    /// a tenth-frame bonus ball always starts from a full rack.
    fn rack_before(&self, ball: usize, is_tenth: bool) -> RackState {
        match ball {
            0 => RackState::Fresh,
            1 => {
                let first = self.throws[0];
                if is_tenth && first == PINS_PER_RACK {
                    RackState::Fresh
                } else {
                    RackState::Partial {
                        standing: PINS_PER_RACK.saturating_sub(first),
                    }
                }
            }
            _ => RackState::Fresh,
        }
    }

    /// Rack the next throw will face, `None` once the frame is complete
    pub fn next_rack(&self, is_tenth: bool) -> Option<RackState> {
        if self.is_complete(is_tenth) {
            return None;
        }
        Some(self.rack_before(self.throws.len(), is_tenth))
    }

    /// Check that `pins` can be knocked by the next throw of this frame
    pub fn validate(&self, pins: u8, frame_index: usize, is_tenth: bool) -> Result<(), InvalidThrowError> {
        if pins > PINS_PER_RACK {
            return Err(InvalidThrowError::OutOfRange { pins: pins as i32 });
        }
        let rack = self
            .next_rack(is_tenth)
            .ok_or(InvalidThrowError::FrameComplete { frame: frame_index + 1 })?;
        let standing = rack.standing();
        if pins > standing {
            return Err(InvalidThrowError::ExceedsStanding { pins, standing });
        }
        Ok(())
    }

    /// Append a throw and decide strike/spare when they become decidable
    pub fn record(
        &mut self,
        pins: u8,
        frame_index: usize,
        is_tenth: bool,
    ) -> Result<FrameStatus, InvalidThrowError> {
        self.validate(pins, frame_index, is_tenth)?;
        self.throws.push(pins);

        match self.throws.len() {
            1 => self.is_strike = pins == PINS_PER_RACK,
            2 => {
                self.is_spare =
                    !self.is_strike && self.throws[0] + self.throws[1] == PINS_PER_RACK;
            }
            _ => {}
        }

        Ok(self.status(is_tenth))
    }

    /// Scoreboard marks for each recorded throw: `X` strike, `/` spare, `-` miss
    pub fn marks(&self, is_tenth: bool) -> Vec<char> {
        self.throws
            .iter()
            .enumerate()
            .map(|(ball, &pins)| match self.rack_before(ball, is_tenth) {
                RackState::Fresh if pins == PINS_PER_RACK => 'X',
                RackState::Partial { standing } if pins == standing && standing > 0 => '/',
                _ if pins == 0 => '-',
                _ => char::from(b'0' + pins),
            })
            .collect()
    }

    /// Throw slots shown on the scoreboard for this frame
    pub fn slot_count(is_tenth: bool) -> usize {
        if is_tenth { 3 } else { 2 }
    }
}
