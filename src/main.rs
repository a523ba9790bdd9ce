//! Terminal Pong entry point
//!
//! Owns the terminal lifecycle and runs the fixed-rate frame loop: sample
//! key levels, advance the match one frame, render into the cell grid,
//! flush. The simulation never sees the terminal.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use log::info;

use classic_pong::consts::FRAME_RATE;
use classic_pong::render::render;
use classic_pong::sim::{MatchState, advance};
use classic_pong::term::{CellGrid, HeldKeys, TermScreen, should_quit};

fn main() -> Result<()> {
    env_logger::init();
    info!("starting, {FRAME_RATE} frames per second");

    let mut screen = TermScreen::enter()?;
    let outcome = run(&mut screen);
    let _ = screen.exit();

    let state = outcome?;
    info!("final score {} - {}", state.score1, state.score2);
    Ok(())
}

/// The frame loop. Returns the last match state when the player quits.
fn run(screen: &mut TermScreen) -> Result<MatchState> {
    let frame = Duration::from_secs(1) / FRAME_RATE;
    let mut state = MatchState::new();
    let mut keys = HeldKeys::new();
    let mut grid = CellGrid::new();
    let mut next_frame = Instant::now() + frame;

    loop {
        // Drain events until the frame deadline.
        loop {
            let now = Instant::now();
            if now >= next_frame {
                break;
            }
            if event::poll(next_frame - now)? {
                if let Event::Key(key) = event::read()? {
                    if should_quit(key) {
                        return Ok(state);
                    }
                    keys.on_key(&key, Instant::now());
                }
            }
        }
        next_frame += frame;

        let input = keys.sample(Instant::now());
        advance(&mut state, &input);

        grid.clear();
        render(&state, &mut grid);
        screen.draw(&grid)?;
    }
}
