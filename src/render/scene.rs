//! Scene assembly: match state to ordered draw intents

use crate::consts::*;
use crate::render::intent::{Color, DrawIntent, DrawSink, Font};
use crate::sim::state::{MatchPhase, MatchState, Side};

/// Title-screen message, blinked on and off while waiting for the serve
const START_TEXT: &str = "PONG - Press Enter to Start";
const LEFT_WINS_TEXT: &str = "Player 1 Wins!";
const RIGHT_WINS_TEXT: &str = "Player 2 Wins!";

/// Emit the draw intents for the current state, in draw order.
///
/// Pure projection: the same state always yields the same intents, and
/// nothing in the state (tickers included) is touched.
pub fn render(state: &MatchState, sink: &mut impl DrawSink) {
    if state.phase == MatchPhase::Starting && state.show_start_message {
        submit_centered_text(sink, START_TEXT);
        return;
    }

    if state.phase == MatchPhase::Winner {
        let banner = match state.winner() {
            Some(Side::Right) => RIGHT_WINS_TEXT,
            _ => LEFT_WINS_TEXT,
        };
        submit_centered_text(sink, banner);
        return;
    }

    // The playfield. Resetting and the blink-off half of Starting show the
    // same scene as active play.
    sink.submit(DrawIntent::Rect {
        x: PADDLE1_X,
        y: state.paddle1.y,
        width: PADDLE_WIDTH,
        height: PADDLE_HEIGHT,
        color: Color::White,
    });
    sink.submit(DrawIntent::Rect {
        x: PADDLE2_X,
        y: state.paddle2.y,
        width: PADDLE_WIDTH,
        height: PADDLE_HEIGHT,
        color: Color::White,
    });
    sink.submit(DrawIntent::Rect {
        x: state.ball.pos.x,
        y: state.ball.pos.y,
        width: BALL_SIZE,
        height: BALL_SIZE,
        color: Color::White,
    });

    submit_text(
        sink,
        state.score1.to_string(),
        SCREEN_WIDTH / 2.0 - 50.0,
        30.0,
    );
    submit_text(
        sink,
        state.score2.to_string(),
        SCREEN_WIDTH / 2.0 + 40.0,
        30.0,
    );

    // Dashed center line: a 20 px dash every 30 px down the field.
    for y in (0..SCREEN_HEIGHT as u32).step_by(30) {
        sink.submit(DrawIntent::Rect {
            x: SCREEN_WIDTH / 2.0 - 1.0,
            y: y as f32,
            width: 2.0,
            height: 20.0,
            color: Color::White,
        });
    }
}

/// Text centered on the field, on the vertical midline.
///
/// The x position floors to a whole pixel, so odd pixel counts lean left.
fn submit_centered_text(sink: &mut impl DrawSink, text: &str) {
    let font = Font::Fixed7x13;
    let x = ((SCREEN_WIDTH - text.len() as f32 * font.glyph_width()) / 2.0).floor();
    sink.submit(DrawIntent::Text {
        text: text.to_owned(),
        font,
        x,
        y: SCREEN_HEIGHT / 2.0,
        color: Color::White,
    });
}

fn submit_text(sink: &mut impl DrawSink, text: String, x: f32, y: f32) {
    sink.submit(DrawIntent::Text {
        text,
        font: Font::Fixed7x13,
        x,
        y,
        color: Color::White,
    });
}
