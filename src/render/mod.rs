//! Draw-intent projection of the match state
//!
//! Rendering is split from simulation: `render` turns a `MatchState` into an
//! ordered sequence of abstract draw intents and never mutates anything. A
//! front end (terminal cells, pixels, a test buffer) consumes the intents
//! through `DrawSink` and decides what they look like.

pub mod intent;
pub mod scene;

pub use intent::{Color, DrawIntent, DrawSink, Font};
pub use scene::render;
