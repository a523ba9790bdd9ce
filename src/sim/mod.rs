//! Deterministic match simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-based counters only (the driver owns wall-clock time)
//! - One writer: state is mutated through `advance` alone
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{deflected_vy, hits_paddle};
pub use input::FrameInput;
pub use state::{Ball, MatchPhase, MatchState, Paddle, Side};
pub use tick::advance;
