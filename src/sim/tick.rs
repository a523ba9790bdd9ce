//! Per-frame match update
//!
//! `advance` runs one frame of the match: the cancel override first, then
//! the current phase's logic. Everything is measured in pixels and frames;
//! the driver owns wall-clock time and calls this once per frame.

use crate::consts::*;
use crate::sim::collision::{deflected_vy, hits_paddle};
use crate::sim::input::FrameInput;
use crate::sim::state::{MatchPhase, MatchState, Side};

/// Advance the match by one frame.
///
/// Total over its inputs: no I/O, no failure, no allocation. Must be called
/// exactly once per simulated frame with that frame's input snapshot.
pub fn advance(state: &mut MatchState, input: &FrameInput) {
    // Cancel aborts from any phase: back to the title with the scores
    // wiped. Tickers and ball velocity keep their values.
    if input.cancel {
        state.phase = MatchPhase::Starting;
        state.score1 = 0;
        state.score2 = 0;
        state.ball.recenter();
        return;
    }

    match state.phase {
        MatchPhase::Starting => {
            // Blink the start message, then serve once confirm is held.
            state.blink_ticker += 1;
            if state.blink_ticker >= BLINK_FRAMES {
                state.show_start_message = !state.show_start_message;
                state.blink_ticker = 0;
            }
            if input.confirm {
                state.ball.recenter();
                state.phase = MatchPhase::Playing;
            }
        }
        MatchPhase::Playing => {
            play_frame(state, input);
        }
        MatchPhase::Resetting => {
            // Hold the ball where the point ended, then serve again.
            state.reset_ticker += 1;
            if state.reset_ticker > RESET_DELAY_FRAMES {
                state.reset_ticker = 0;
                state.ball.recenter();
                state.phase = MatchPhase::Playing;
            }
        }
        MatchPhase::Winner => {
            // Scores stay frozen on the banner until confirm is held.
            if input.confirm {
                state.score1 = 0;
                state.score2 = 0;
                state.phase = MatchPhase::Starting;
            }
        }
    }
}

/// One frame of active play.
///
/// The whole body runs even when a wall is struck and the phase flips
/// mid-frame: paddles still move and paddle collisions still fire on a
/// scoring frame.
fn play_frame(state: &mut MatchState, input: &FrameInput) {
    // Integrate.
    state.ball.pos += state.ball.vel;

    // Side walls score for the opposite player. else-if: one wall per frame.
    if state.ball.pos.x < 0.0 {
        state.ball.vel.x = -state.ball.vel.x;
        state.ball.pos.x = 0.0;
        state.score2 += 1;
        state.phase = after_point(state.score2);
    } else if state.ball.pos.x > SCREEN_WIDTH - BALL_SIZE {
        state.ball.vel.x = -state.ball.vel.x;
        state.ball.pos.x = SCREEN_WIDTH - BALL_SIZE;
        state.score1 += 1;
        state.phase = after_point(state.score1);
    }

    // Top and bottom walls just reflect.
    if state.ball.pos.y < 0.0 {
        state.ball.vel.y = -state.ball.vel.y;
        state.ball.pos.y = 0.0;
    } else if state.ball.pos.y > SCREEN_HEIGHT - BALL_SIZE {
        state.ball.vel.y = -state.ball.vel.y;
        state.ball.pos.y = SCREEN_HEIGHT - BALL_SIZE;
    }

    debug_assert!(
        (0.0..=SCREEN_WIDTH - BALL_SIZE).contains(&state.ball.pos.x)
            && (0.0..=SCREEN_HEIGHT - BALL_SIZE).contains(&state.ball.pos.y),
        "ball escaped the field after wall correction: {:?}",
        state.ball.pos
    );

    // Paddles move while their keys are held. No vertical clamp: paddles
    // may walk off the field.
    if input.paddle1_up {
        state.paddle1.y -= PADDLE_SPEED;
    }
    if input.paddle1_down {
        state.paddle1.y += PADDLE_SPEED;
    }
    if input.paddle2_up {
        state.paddle2.y -= PADDLE_SPEED;
    }
    if input.paddle2_down {
        state.paddle2.y += PADDLE_SPEED;
    }

    // Both paddles are tested every frame, with no else between them.
    if hits_paddle(state.ball.pos, state.paddle1.y, Side::Left) {
        state.ball.vel.x = -state.ball.vel.x;
        state.ball.vel.y = deflected_vy(state.ball.pos.y, state.paddle1.y);
    }
    if hits_paddle(state.ball.pos, state.paddle2.y, Side::Right) {
        state.ball.vel.x = -state.ball.vel.x;
        state.ball.vel.y = deflected_vy(state.ball.pos.y, state.paddle2.y);
    }
}

/// Phase after a point: the match ends when the scorer reaches the cap,
/// otherwise the ball freezes for the reset delay.
fn after_point(new_total: u32) -> MatchPhase {
    if new_total >= MAX_SCORE {
        MatchPhase::Winner
    } else {
        MatchPhase::Resetting
    }
}
