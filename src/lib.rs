//! Classic Pong - a two-player arcade match
//!
//! Core modules:
//! - `sim`: Deterministic match simulation (state machine, physics, scoring)
//! - `render`: Draw-intent projection of the match state
//! - `term`: Terminal front end (key sampling, cell rasterization)

pub mod render;
pub mod sim;
pub mod term;

pub use render::{Color, DrawIntent, DrawSink, Font, render};
pub use sim::{Ball, FrameInput, MatchPhase, MatchState, Paddle, Side, advance};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Playfield dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 640.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;

    /// Paddle dimensions
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    /// Vertical paddle travel per held key per frame
    pub const PADDLE_SPEED: f32 = 4.0;
    /// Draw x of the left paddle (inset from the left wall)
    pub const PADDLE1_X: f32 = 10.0;
    /// Draw x of the right paddle (same inset from the right wall)
    pub const PADDLE2_X: f32 = SCREEN_WIDTH - PADDLE1_X - PADDLE_WIDTH;

    /// The ball is a square this many pixels on a side
    pub const BALL_SIZE: f32 = 20.0;
    /// Where the ball sits on every serve
    pub const SERVE_POS: Vec2 = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
    /// Ball velocity at match start (pixels per frame)
    pub const SERVE_VEL: Vec2 = Vec2::new(3.0, 2.0);

    /// First player to reach this total wins the match
    pub const MAX_SCORE: u32 = 5;
    /// Scales the paddle-relative hit position into the rebound dy
    pub const DEFLECT_GAIN: f32 = 5.0;

    /// Start-message blink half-period in frames
    pub const BLINK_FRAMES: u32 = 30;
    /// Frames the ball stays frozen after a point before play resumes
    pub const RESET_DELAY_FRAMES: u32 = 60;

    /// Nominal driver frame rate (frames per second)
    pub const FRAME_RATE: u32 = 60;
}
