//! Scoring model
//!
//! Pure bookkeeping, no timing or rendering:
//! - A `Frame` records its throws and knows when it is complete
//! - A `Player` owns ten frames and fills in cumulative scores as lookahead throws arrive

pub mod frame;
pub mod player;

pub use frame::{Frame, FrameStatus, RackState, pins_from_f64};
pub use player::{Player, ThrowOutcome};
