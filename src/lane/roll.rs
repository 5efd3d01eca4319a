//! Ball roll down the lane and pin fall
//!
//! Deliberately simple: the ball runs a straight line from the foul line,
//! takes out every pin it touches, and felled pins topple neighbours with a
//! power-scaled chance. Seeded RNG only, so a seed replays the same throws.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rack::{PinState, Rack};
use crate::consts::*;

/// Aim and power chosen for a throw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Roll {
    /// Radians from straight down the lane (positive = right)
    pub aim: f32,
    /// Release power, 0-1
    pub power: f32,
    /// Release point across the foul line
    pub start_x: f32,
}

impl Roll {
    pub fn new(aim: f32, power: f32) -> Self {
        Self {
            aim: aim.clamp(-MAX_AIM, MAX_AIM),
            power: power.clamp(0.0, 1.0),
            start_x: 0.0,
        }
    }

    /// Release velocity (x = side, y = down the lane)
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(
            self.aim.sin() * SIDE_GAIN,
            BASE_FORWARD_SPEED + self.power * POWER_GAIN,
        )
    }

    /// Lateral ball position when it reaches depth `y`
    pub fn x_at(&self, y: f32) -> f32 {
        let vel = self.velocity();
        self.start_x + vel.x / vel.y * y
    }

    /// Aim that carries the ball from `start_x` to `target` at the same power
    pub fn aim_for(start_x: f32, target: Vec2, power: f32) -> f32 {
        let forward = BASE_FORWARD_SPEED + power.clamp(0.0, 1.0) * POWER_GAIN;
        let side = (target.x - start_x) / target.y * forward;
        (side / SIDE_GAIN).clamp(-1.0, 1.0).asin()
    }
}

/// What happened on the lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Pins newly knocked down by this ball
    pub pins_down: u8,
    pub gutter: bool,
}

/// Roll a ball into the rack and let the pins settle
pub fn roll_ball(rack: &mut Rack, roll: &Roll, rng: &mut Pcg32) -> RollResult {
    // Ball leaves the lane before reaching the deck
    if roll.x_at(HEAD_PIN_DISTANCE).abs() > LANE_HALF_WIDTH {
        return RollResult {
            pins_down: 0,
            gutter: true,
        };
    }

    let contact = BALL_RADIUS + PIN_RADIUS;
    let mut felled: Vec<usize> = Vec::new();
    for (i, pin) in rack.pins.iter_mut().enumerate() {
        if pin.is_standing() && (roll.x_at(pin.pos.y) - pin.pos.x).abs() < contact {
            pin.state = PinState::Down;
            felled.push(i);
        }
    }

    // Pin action: each falling pin may take down neighbours beside or behind it
    let topple_chance = 0.35 + 0.5 * roll.power;
    let mut next = 0;
    while next < felled.len() {
        let from = rack.pins[felled[next]].pos;
        next += 1;
        for j in 0..rack.pins.len() {
            let pin = &rack.pins[j];
            if !pin.is_standing() || pin.pos.y < from.y - 0.01 {
                continue;
            }
            if pin.pos.distance(from) <= PIN_SPACING * 1.05 && rng.random::<f32>() < topple_chance {
                rack.pins[j].state = PinState::Down;
                felled.push(j);
            }
        }
    }

    RollResult {
        pins_down: felled.len() as u8,
        gutter: false,
    }
}
