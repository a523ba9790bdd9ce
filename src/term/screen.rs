//! TermScreen: flushes the cell grid to a real terminal
//!
//! Raw mode plus alternate screen for the lifetime of the match, full
//! redraw every frame.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{QueueableCommand, cursor, terminal};

use crate::term::grid::{CellGrid, ROWS};

pub struct TermScreen {
    stdout: io::Stdout,
}

impl TermScreen {
    /// Take over the terminal: raw mode, alternate screen, hidden cursor.
    pub fn enter() -> Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        stdout.queue(terminal::EnterAlternateScreen)?;
        stdout.queue(terminal::SetTitle("Pong"))?;
        stdout.queue(terminal::Clear(terminal::ClearType::All))?;
        stdout.queue(cursor::Hide)?;
        stdout.queue(terminal::DisableLineWrap)?;
        stdout.flush()?;
        Ok(Self { stdout })
    }

    /// Hand the terminal back. Call once on the way out, error paths too.
    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Push the whole grid to the terminal, one queued line per row.
    pub fn draw(&mut self, grid: &CellGrid) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        let mut line = String::new();
        for row in 0..ROWS {
            line.clear();
            line.extend(grid.row(row));
            self.stdout.queue(crossterm::style::Print(&line))?;
            if row + 1 < ROWS {
                self.stdout.queue(crossterm::style::Print("\r\n"))?;
            }
        }

        self.stdout.flush()?;
        Ok(())
    }
}
