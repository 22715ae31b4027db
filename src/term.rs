use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyCode, KeyEvent};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, terminal};

use crate::error::Result;
use crate::snake::Direction;

const INSTRUCTIONS: &str = "w/a/s/d to steer, q to quit";

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Input {
    Steer(Direction),
    Quit,
}

/// Raw-mode terminal wrapper: non-blocking keystroke polling in, full-grid
/// redraws out. Setup and restore are symmetric; the caller guarantees
/// restore runs on every exit route.
pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout() }
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide)?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        execute!(self.stdout, cursor::Show)?;
        terminal::disable_raw_mode()?;
        execute!(self.stdout, LeaveAlternateScreen)?;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))?;
        Ok(())
    }

    /// Reads at most one pending keystroke without blocking. Keys with no
    /// meaning for the game come back as `None`, same as no input at all.
    pub fn poll_input(&mut self) -> Result<Option<Input>> {
        if poll(Duration::from_millis(0))? {
            if let Event::Key(KeyEvent { code, .. }) = read()? {
                return Ok(map_key(code));
            }
        }
        Ok(None)
    }

    /// Redraws the grid in place, followed by the instruction and score
    /// lines.
    pub fn draw<I>(&mut self, rows: I, score: u32) -> Result<()>
    where
        I: Iterator<Item = String>,
    {
        queue!(self.stdout, cursor::MoveTo(0, 0))?;
        for row in rows {
            queue!(self.stdout, style::Print(row), cursor::MoveToNextLine(1))?;
        }
        queue!(self.stdout, style::Print(INSTRUCTIONS), cursor::MoveToNextLine(1))?;
        queue!(self.stdout, style::Print(format!("Score: {}", score)))?;
        self.stdout.flush()?;
        Ok(())
    }
}

fn map_key(code: KeyCode) -> Option<Input> {
    match code {
        KeyCode::Char('w') => Some(Input::Steer(Direction::Up)),
        KeyCode::Char('a') => Some(Input::Steer(Direction::Left)),
        KeyCode::Char('s') => Some(Input::Steer(Direction::Down)),
        KeyCode::Char('d') => Some(Input::Steer(Direction::Right)),
        KeyCode::Char('q') => Some(Input::Quit),
        _ => None,
    }
}
