//! Terminal front end
//!
//! Everything that touches the terminal lives here: folding key events into
//! per-frame input snapshots, rasterizing draw intents onto a cell grid,
//! and flushing that grid to a raw-mode alternate screen. The simulation
//! knows nothing about any of it.

pub mod grid;
pub mod input;
pub mod screen;

pub use grid::CellGrid;
pub use input::{HeldKeys, should_quit};
pub use screen::TermScreen;
