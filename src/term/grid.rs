//! Cell grid: draw intents rasterized onto terminal cells
//!
//! Maps the 640x480 playfield onto an 80x30 character grid, 8 px per column
//! and 16 px per row. Rect intents fill the covered cells with a block
//! glyph (or blanks for black, which erases); text intents land glyph per
//! cell from their mapped position. Later intents paint over earlier ones.

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::render::{Color, DrawIntent, DrawSink};

/// Playfield pixels per terminal column
const CELL_W: f32 = 8.0;
/// Playfield pixels per terminal row
const CELL_H: f32 = 16.0;

/// Grid width in cells
pub const COLS: u16 = (SCREEN_WIDTH / CELL_W) as u16;
/// Grid height in cells
pub const ROWS: u16 = (SCREEN_HEIGHT / CELL_H) as u16;

const BLANK: char = ' ';
const BLOCK: char = '█';

/// 2D grid of character cells covering the playfield
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    cells: Vec<char>,
}

impl CellGrid {
    pub fn new() -> Self {
        Self {
            cells: vec![BLANK; COLS as usize * ROWS as usize],
        }
    }

    /// Blank the whole grid for a new frame.
    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    pub fn get(&self, col: u16, row: u16) -> Option<char> {
        self.idx(col, row).map(|i| self.cells[i])
    }

    /// One row of cells, for flushing to the terminal.
    pub fn row(&self, row: u16) -> &[char] {
        let start = row as usize * COLS as usize;
        &self.cells[start..start + COLS as usize]
    }

    #[inline(always)]
    fn idx(&self, col: u16, row: u16) -> Option<usize> {
        if col >= COLS || row >= ROWS {
            return None;
        }
        Some(row as usize * COLS as usize + col as usize)
    }

    fn set(&mut self, col: u16, row: u16, ch: char) {
        if let Some(i) = self.idx(col, row) {
            self.cells[i] = ch;
        }
    }

    /// Fill every cell the pixel rect touches. Off-grid parts are dropped.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, ch: char) {
        let col0 = (x / CELL_W).floor() as i32;
        let col1 = ((x + width) / CELL_W).ceil() as i32;
        let row0 = (y / CELL_H).floor() as i32;
        let row1 = ((y + height) / CELL_H).ceil() as i32;

        for row in row0.max(0)..row1.min(ROWS as i32) {
            for col in col0.max(0)..col1.min(COLS as i32) {
                self.set(col as u16, row as u16, ch);
            }
        }
    }

    /// Place a string with one glyph per cell, clipped at the grid edge.
    fn put_text(&mut self, x: f32, y: f32, text: &str) {
        let row = (y / CELL_H).floor() as i32;
        if row < 0 || row >= ROWS as i32 {
            return;
        }
        let col0 = (x / CELL_W).floor() as i32;
        for (i, ch) in text.chars().enumerate() {
            let col = col0 + i as i32;
            if col < 0 {
                continue;
            }
            if col >= COLS as i32 {
                break;
            }
            self.set(col as u16, row as u16, ch);
        }
    }
}

impl Default for CellGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSink for CellGrid {
    fn submit(&mut self, intent: DrawIntent) {
        match intent {
            DrawIntent::Rect {
                x,
                y,
                width,
                height,
                color,
            } => {
                let ch = match color {
                    Color::White => BLOCK,
                    Color::Black => BLANK,
                };
                self.fill_rect(x, y, width, height, ch);
            }
            DrawIntent::Text { text, x, y, .. } => {
                self.put_text(x, y, &text);
            }
        }
    }
}
