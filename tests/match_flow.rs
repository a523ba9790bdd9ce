//! Whole-match flows through the public API

use glam::Vec2;

use classic_pong::consts::{MAX_SCORE, RESET_DELAY_FRAMES, SERVE_POS};
use classic_pong::render::{DrawIntent, render};
use classic_pong::sim::{FrameInput, MatchPhase, MatchState, advance};

fn idle() -> FrameInput {
    FrameInput::default()
}

fn confirm() -> FrameInput {
    FrameInput {
        confirm: true,
        ..FrameInput::default()
    }
}

fn scene(state: &MatchState) -> Vec<DrawIntent> {
    let mut sink = Vec::new();
    render(state, &mut sink);
    sink
}

#[test]
fn a_match_runs_title_to_winner_and_back() {
    let mut state = MatchState::new();

    // Title screen: just the start message.
    assert_eq!(scene(&state).len(), 1);

    advance(&mut state, &confirm());
    assert_eq!(state.phase, MatchPhase::Playing);
    assert_eq!(state.ball.pos, SERVE_POS);

    // Player 2 takes five straight points off the left wall.
    for point in 1..=MAX_SCORE {
        state.ball.pos = Vec2::new(2.0, 100.0);
        state.ball.vel = Vec2::new(-3.0, 2.0);
        advance(&mut state, &idle());
        assert_eq!(state.score2, point);

        if point < MAX_SCORE {
            assert_eq!(state.phase, MatchPhase::Resetting);
            for _ in 0..=RESET_DELAY_FRAMES {
                advance(&mut state, &idle());
            }
            assert_eq!(state.phase, MatchPhase::Playing);
            assert_eq!(state.ball.pos, SERVE_POS);
        }
    }

    assert_eq!(state.phase, MatchPhase::Winner);
    let intents = scene(&state);
    assert_eq!(intents.len(), 1);
    assert!(matches!(
        &intents[0],
        DrawIntent::Text { text, .. } if text == "Player 2 Wins!"
    ));

    // The banner holds the final score until confirm.
    for _ in 0..30 {
        advance(&mut state, &idle());
    }
    assert_eq!((state.score1, state.score2), (0, MAX_SCORE));

    advance(&mut state, &confirm());
    assert_eq!(state.phase, MatchPhase::Starting);
    assert_eq!((state.score1, state.score2), (0, 0));
}

#[test]
fn cancel_mid_rally_returns_to_the_title() {
    let mut state = MatchState::new();
    advance(&mut state, &confirm());

    let keys = FrameInput {
        paddle1_down: true,
        paddle2_up: true,
        ..FrameInput::default()
    };
    for _ in 0..50 {
        advance(&mut state, &keys);
    }
    assert_eq!(state.phase, MatchPhase::Playing);
    assert_ne!(state.ball.pos, SERVE_POS);

    let cancel = FrameInput {
        cancel: true,
        ..FrameInput::default()
    };
    advance(&mut state, &cancel);

    assert_eq!(state.phase, MatchPhase::Starting);
    assert_eq!((state.score1, state.score2), (0, 0));
    assert_eq!(state.ball.pos, SERVE_POS);
    assert_eq!(scene(&state).len(), 1);
}

#[test]
fn lockstep_runs_stay_identical() {
    // A scripted session: serve, shuffle both paddles around, abort late,
    // serve again. Two runs of it must match snapshot for snapshot.
    let script = |frame: u64| FrameInput {
        cancel: frame == 390,
        confirm: frame == 0 || frame == 400,
        paddle1_up: (10..80).contains(&frame),
        paddle1_down: (200..260).contains(&frame),
        paddle2_up: (120..190).contains(&frame),
        paddle2_down: (30..90).contains(&frame),
    };

    let mut a = MatchState::new();
    let mut b = MatchState::new();
    for frame in 0..600u64 {
        let input = script(frame);
        advance(&mut a, &input);
        advance(&mut b, &input);

        let snap_a = serde_json::to_string(&a).expect("state serializes");
        let snap_b = serde_json::to_string(&b).expect("state serializes");
        assert_eq!(snap_a, snap_b, "runs diverged at frame {frame}");
    }

    let snapshot = serde_json::to_string(&a).expect("state serializes");
    let restored: MatchState = serde_json::from_str(&snapshot).expect("state round-trips");
    assert_eq!(restored, a);
}
