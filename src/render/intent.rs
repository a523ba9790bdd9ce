//! Draw intents and the sink they flow into

use serde::{Deserialize, Serialize};

/// The palette. The match renders in monochrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

/// Font handle for text intents. One face: a fixed-width 7x13 bitmap font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Font {
    Fixed7x13,
}

impl Font {
    /// Horizontal advance per glyph, in pixels
    #[inline]
    pub const fn glyph_width(self) -> f32 {
        match self {
            Font::Fixed7x13 => 7.0,
        }
    }
}

/// One abstract draw instruction, in playfield pixels.
///
/// Intents carry no surface or pixel-format detail; later intents paint
/// over earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawIntent {
    /// Axis-aligned filled rectangle
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    /// Text run; `y` is the baseline, as bitmap fonts draw
    Text {
        text: String,
        font: Font,
        x: f32,
        y: f32,
        color: Color,
    },
}

/// Receiver for an ordered sequence of draw intents
pub trait DrawSink {
    fn submit(&mut self, intent: DrawIntent);
}

/// Collects intents in order; the test and capture sink
impl DrawSink for Vec<DrawIntent> {
    fn submit(&mut self, intent: DrawIntent) {
        self.push(intent);
    }
}
