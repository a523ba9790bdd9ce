//! Key-level tracking over terminal key events
//!
//! The simulation consumes key levels (held or not, once per frame) but
//! terminals deliver events, and most never report releases. A key
//! therefore counts as held from its last press or repeat event until
//! either a release arrives or the hold timeout expires. Terminal
//! auto-repeat refreshes the timestamp well inside the window, so a held
//! key stays held and a tapped one decays quickly.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::sim::FrameInput;

/// How long a key stays held after its last press/repeat event
const HOLD_TIMEOUT: Duration = Duration::from_millis(150);

/// The controls the match cares about, in `FrameInput` order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    Cancel,
    Confirm,
    Paddle1Up,
    Paddle1Down,
    Paddle2Up,
    Paddle2Down,
}

const CONTROL_COUNT: usize = 6;

impl Control {
    fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Esc => Some(Control::Cancel),
            KeyCode::Enter => Some(Control::Confirm),
            KeyCode::Char('w') | KeyCode::Char('W') => Some(Control::Paddle1Up),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(Control::Paddle1Down),
            KeyCode::Up => Some(Control::Paddle2Up),
            KeyCode::Down => Some(Control::Paddle2Down),
            _ => None,
        }
    }
}

/// Per-control last-seen timestamps, sampled once per frame
#[derive(Debug, Default)]
pub struct HeldKeys {
    last_seen: [Option<Instant>; CONTROL_COUNT],
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one key event into the held state.
    pub fn on_key(&mut self, event: &KeyEvent, now: Instant) {
        let Some(control) = Control::from_key(event.code) else {
            return;
        };
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_seen[control as usize] = Some(now);
            }
            KeyEventKind::Release => {
                self.last_seen[control as usize] = None;
            }
        }
    }

    /// Sample the key levels for this frame, expiring stale holds.
    pub fn sample(&mut self, now: Instant) -> FrameInput {
        for slot in &mut self.last_seen {
            if slot.is_some_and(|seen| now.duration_since(seen) > HOLD_TIMEOUT) {
                *slot = None;
            }
        }
        FrameInput {
            cancel: self.is_held(Control::Cancel),
            confirm: self.is_held(Control::Confirm),
            paddle1_up: self.is_held(Control::Paddle1Up),
            paddle1_down: self.is_held(Control::Paddle1Down),
            paddle2_up: self.is_held(Control::Paddle2Up),
            paddle2_down: self.is_held(Control::Paddle2Down),
        }
    }

    fn is_held(&self, control: Control) -> bool {
        self.last_seen[control as usize].is_some()
    }
}

/// True when the event should quit the front end: `q`, or Ctrl-C.
pub fn should_quit(event: KeyEvent) -> bool {
    if event.kind == KeyEventKind::Release {
        return false;
    }
    match event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
