//! Pin rack: ten pins in the standard triangle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Pin condition on the deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PinState {
    Standing,
    /// Knocked down by the current ball, still on the deck
    Down,
    /// Swept away between balls
    Removed,
}

/// A single pin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pin {
    /// Standard pin number, 1 (head pin) to 10
    pub number: u8,
    pub pos: Vec2,
    pub state: PinState,
}

impl Pin {
    pub fn is_standing(&self) -> bool {
        self.state == PinState::Standing
    }
}

/// The ten pins at the end of the lane
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rack {
    pub pins: Vec<Pin>,
}

impl Default for Rack {
    fn default() -> Self {
        Self::new()
    }
}

impl Rack {
    /// Full rack, numbered row by row from the head pin, left to right
    pub fn new() -> Self {
        let mut pins = Vec::with_capacity(PINS_PER_RACK as usize);
        let mut number = 1;
        for row in 0..4u8 {
            for k in 0..=row {
                let x = (k as f32 - row as f32 / 2.0) * PIN_SPACING;
                let y = HEAD_PIN_DISTANCE + row as f32 * PIN_ROW_DEPTH;
                pins.push(Pin {
                    number,
                    pos: Vec2::new(x, y),
                    state: PinState::Standing,
                });
                number += 1;
            }
        }
        Self { pins }
    }

    pub fn standing(&self) -> impl Iterator<Item = &Pin> {
        self.pins.iter().filter(|p| p.is_standing())
    }

    pub fn standing_count(&self) -> u8 {
        self.standing().count() as u8
    }

    /// Pins knocked down by the ball still on the deck
    pub fn down_count(&self) -> u8 {
        self.pins.iter().filter(|p| p.state == PinState::Down).count() as u8
    }

    /// Sweep away knocked pins, leaving the standing ones for the next ball
    pub fn clear_knocked(&mut self) {
        for pin in &mut self.pins {
            if pin.state == PinState::Down {
                pin.state = PinState::Removed;
            }
        }
    }

    /// Set a full rack
    pub fn reset(&mut self) {
        for pin in &mut self.pins {
            pin.state = PinState::Standing;
        }
    }

    /// Mean lateral position of standing pins (lane center when none)
    pub fn standing_center(&self) -> f32 {
        let count = self.standing_count();
        if count == 0 {
            return 0.0;
        }
        self.standing().map(|p| p.pos.x).sum::<f32>() / count as f32
    }
}
