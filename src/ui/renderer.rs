//! Terminal renderer using crossterm
//!
//! Implements `Canvas` on the real terminal. Writes are queued and only reach
//! the screen on `flush`.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::debug;

use crate::core::{Canvas, ColorPair};

/// Terminal renderer
pub struct Renderer {
    stdout: Stdout,
    /// Whether the terminal has been initialized
    initialized: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            initialized: false,
        }
    }

    /// Initialize the terminal for rendering
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.stdout,
            EnterAlternateScreen,
            DisableLineWrap,
            Hide,
            Clear(ClearType::All),
            MoveTo(0, 0)
        )?;
        self.initialized = true;
        debug!("Terminal initialized");
        Ok(())
    }

    /// Cleanup the terminal
    pub fn cleanup(&mut self) -> io::Result<()> {
        if !self.initialized {
            return Ok(());
        }
        self.initialized = false;

        // Reset all attributes first
        let _ = execute!(self.stdout, ResetColor, SetAttribute(Attribute::Reset));
        let _ = execute!(self.stdout, Show, EnableLineWrap);
        let _ = execute!(self.stdout, LeaveAlternateScreen);
        let _ = self.stdout.flush();

        // Disable raw mode - this is the most important part
        terminal::disable_raw_mode()?;
        debug!("Terminal restored");
        Ok(())
    }

    /// Get terminal size
    pub fn size() -> io::Result<(u16, u16)> {
        terminal::size()
    }
}

impl Canvas for Renderer {
    fn clear(&mut self) -> io::Result<()> {
        queue!(self.stdout, ResetColor, Clear(ClearType::All))
    }

    fn put_char(&mut self, x: u16, y: u16, ch: char, colors: Option<ColorPair>) -> io::Result<()> {
        queue!(self.stdout, MoveTo(x, y))?;
        match colors {
            Some(colors) => queue!(
                self.stdout,
                SetForegroundColor(colors.fg.to_crossterm()),
                SetBackgroundColor(colors.bg.to_crossterm()),
                Print(ch),
                ResetColor
            ),
            None => queue!(self.stdout, Print(ch)),
        }
    }

    fn put_str(&mut self, x: u16, y: u16, text: &str) -> io::Result<()> {
        queue!(self.stdout, MoveTo(x, y), Print(text))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
