//! Match state and core simulation types
//!
//! Everything the tick mutates and the renderer projects lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Title screen, blinking the start message until confirm is held
    Starting,
    /// Active rally
    Playing,
    /// Short freeze after a point before the next serve
    Resetting,
    /// Match decided; waiting for confirm to return to the title
    Winner,
}

/// The two competitors, by side of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Player 1, left paddle
    Left,
    /// Player 2, right paddle
    Right,
}

/// The ball - an axis-aligned square
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner (pixels)
    pub pos: Vec2,
    /// Velocity (pixels per frame)
    pub vel: Vec2,
}

impl Ball {
    /// Put the ball back on the serve point. Velocity is untouched: the
    /// ball resumes in whatever direction the last rally left it.
    pub fn recenter(&mut self) {
        self.pos = SERVE_POS;
    }
}

/// One player's paddle. Horizontal placement is fixed per side; only the
/// vertical position ever changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top edge (pixels)
    pub y: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            y: (SCREEN_HEIGHT - PADDLE_HEIGHT) / 2.0,
        }
    }
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub ball: Ball,
    /// Left paddle (player 1)
    pub paddle1: Paddle,
    /// Right paddle (player 2)
    pub paddle2: Paddle,
    pub score1: u32,
    pub score2: u32,
    /// Current phase
    pub phase: MatchPhase,
    /// Frames spent so far in the current `Resetting` freeze
    pub reset_ticker: u32,
    /// Frames since the start message last toggled
    pub blink_ticker: u32,
    /// Whether the start message is visible this frame
    pub show_start_message: bool,
}

impl MatchState {
    /// A fresh match: ball on the serve point with the serve velocity,
    /// paddles centered, scores zero, title screen up.
    pub fn new() -> Self {
        Self {
            ball: Ball {
                pos: SERVE_POS,
                vel: SERVE_VEL,
            },
            paddle1: Paddle::default(),
            paddle2: Paddle::default(),
            score1: 0,
            score2: 0,
            phase: MatchPhase::Starting,
            reset_ticker: 0,
            blink_ticker: 0,
            show_start_message: true,
        }
    }

    /// The side that has reached the winning score, if any
    pub fn winner(&self) -> Option<Side> {
        if self.score1 >= MAX_SCORE {
            Some(Side::Left)
        } else if self.score2 >= MAX_SCORE {
            Some(Side::Right)
        } else {
            None
        }
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}
