//! Per-frame input snapshot
//!
//! The simulation never polls a keyboard. Whatever input backend the driver
//! owns gets sampled into this snapshot once per frame and handed to
//! `advance`. Every field is a level (true while held), not an edge event:
//! holding confirm through a phase change triggers the next transition too.

use serde::{Deserialize, Serialize};

/// Key levels for one simulated frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Abort the match and return to the title screen
    pub cancel: bool,
    /// Start the match / dismiss the winner screen
    pub confirm: bool,
    /// Player 1 (left paddle) movement
    pub paddle1_up: bool,
    pub paddle1_down: bool,
    /// Player 2 (right paddle) movement
    pub paddle2_up: bool,
    pub paddle2_down: bool,
}
