//! Computer bowler for demo and idle play

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rack::Rack;
use super::roll::Roll;
use crate::consts::*;

/// Pocket between the 1 and 3 pins (right-handed)
const POCKET_X: f32 = 0.06;

/// Picks aim and power for each ball
#[derive(Debug, Clone)]
pub struct AutoBowler {
    rng: Pcg32,
    /// Aim spread, 0 = perfect
    wildness: f32,
}

impl AutoBowler {
    pub fn new(seed: u64, wildness: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            wildness: wildness.clamp(0.0, 1.0),
        }
    }

    /// Choose the next roll against what is left standing
    pub fn next_roll(&mut self, rack: &Rack) -> Roll {
        let standing = rack.standing_count();
        let target_x = if standing == PINS_PER_RACK {
            POCKET_X
        } else {
            rack.standing_center()
        };

        let power = self.rng.random_range(0.55..=1.0);
        let aim = Roll::aim_for(0.0, Vec2::new(target_x, HEAD_PIN_DISTANCE), power);
        // Spread grows with wildness; 0.03 rad is roughly a board and a half at the pins
        let spread = 0.03 * self.wildness;
        let jitter = if spread > 0.0 {
            self.rng.random_range(-spread..=spread)
        } else {
            0.0
        };

        Roll::new(aim + jitter, power)
    }
}
