//! Lane stand-in for the physics layer
//!
//! Produces the one number the engine consumes per throw (pins newly down)
//! and applies the engine's reset directives. Deterministic:
//! - Seeded RNG only
//! - Stable pin order (by pin number)
//! - No timing; the caller decides when a throw has settled

pub mod bowler;
pub mod rack;
pub mod roll;

pub use bowler::AutoBowler;
pub use rack::{Pin, PinState, Rack};
pub use roll::{Roll, RollResult, roll_ball};

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::engine::{RackReset, ResetDirective};

/// Ball return position at the foul line
const BALL_START_X: f32 = 0.0;

/// Pins, ball and pin-action RNG for one lane
#[derive(Debug, Clone)]
pub struct Lane {
    pub rack: Rack,
    rng: Pcg32,
    /// Ball release point for the next throw
    ball_x: f32,
}

impl Lane {
    pub fn new(seed: u64) -> Self {
        Self {
            rack: Rack::new(),
            rng: Pcg32::seed_from_u64(seed),
            ball_x: BALL_START_X,
        }
    }

    /// Roll the ball and report pins newly knocked down
    pub fn throw(&mut self, roll: Roll) -> RollResult {
        let roll = Roll {
            start_x: self.ball_x,
            ..roll
        };
        let result = roll_ball(&mut self.rack, &roll, &mut self.rng);
        if result.gutter {
            log::debug!("Gutter ball");
        }
        result
    }

    /// Carry out the engine's reset directive
    pub fn apply(&mut self, directive: &ResetDirective) {
        match directive.rack {
            RackReset::Partial => self.rack.clear_knocked(),
            RackReset::Full => self.rack.reset(),
        }
        if directive.reset_ball {
            self.ball_x = BALL_START_X;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_reset_keeps_standing_pins() {
        let mut lane = Lane::new(11);
        let result = lane.throw(Roll::new(0.0, 0.8));
        lane.apply(&ResetDirective::partial());
        assert_eq!(lane.rack.standing_count(), 10 - result.pins_down);
        assert_eq!(lane.rack.down_count(), 0);
    }

    #[test]
    fn test_full_reset_sets_new_rack() {
        let mut lane = Lane::new(11);
        let result = lane.throw(Roll::new(0.0, 0.8));
        assert_eq!(lane.rack.down_count(), result.pins_down);
        lane.apply(&ResetDirective::full());
        assert_eq!(lane.rack.standing_count(), 10);
        assert_eq!(lane.rack.down_count(), 0);
    }
}
