//! Turn engine
//!
//! Drives a series from a stream of settled throws. The engine must stay
//! free of timing and rendering:
//! - One throw in flight at a time (busy flag)
//! - All mutation happens synchronously inside `on_throw_settled`
//! - Every output is a closed event type the front end can match on

pub mod event;
pub mod snapshot;
pub mod state;
pub mod turn;

pub use event::{
    Callout, EngineEvent, GameComplete, RackReset, ResetDirective, ThrowEvent, TurnAdvance,
};
pub use snapshot::{EngineSnapshot, FrameView, PlayerView};
pub use state::{EnginePhase, EngineState, Transition};
pub use turn::{ThrowReport, TurnEngine};
