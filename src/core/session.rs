//! Session - one drawing session driven by key actions
//!
//! A session owns the cursor controller (and through it the surface) and
//! turns each `KeyAction` into a completed operation followed by exactly one
//! flush of the display.

use std::str::FromStr;

use tracing::debug;

use super::cursor::{CursorController, Direction, MoveOutcome};
use super::error::{Result, SketchError};
use super::geometry::Position;
use super::surface::{Canvas, Surface};

/// What the input loop asks the session to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Move(Direction),
    Clear,
    Quit,
    Unrecognized,
}

impl FromStr for KeyAction {
    type Err = SketchError;

    /// Parse a script token such as `left`, `c` or `quit`
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "clear" | "c" => Ok(KeyAction::Clear),
            "quit" | "q" => Ok(KeyAction::Quit),
            other => other.parse().map(KeyAction::Move),
        }
    }
}

/// Whether the input loop should keep reading keys
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<C: Canvas> {
    controller: CursorController<C>,
}

impl<C: Canvas> Session<C> {
    /// Draw the initial screen: header, border and the cursor at its
    /// starting cell.
    pub fn start(surface: Surface<C>, initial: Option<Position>) -> Result<Self> {
        let mut controller = CursorController::new(surface, initial)?;
        controller.clear()?;
        controller.flush()?;
        debug!("Session started at {}", controller.initial_position());
        Ok(Self { controller })
    }

    pub fn controller(&self) -> &CursorController<C> {
        &self.controller
    }

    /// Run one action to completion
    pub fn handle(&mut self, action: KeyAction) -> Result<Flow> {
        match action {
            KeyAction::Move(direction) => {
                match self.controller.move_cursor(direction, 1)? {
                    MoveOutcome::Moved(pos) => debug!("Moved {:?} to {}", direction, pos),
                    MoveOutcome::Blocked => {
                        debug!("Cursor is attempting to move out of bounds ({:?}), ignoring", direction);
                        return Ok(Flow::Continue);
                    }
                }
            }
            KeyAction::Clear => {
                debug!("Clearing");
                self.controller.clear()?;
            }
            KeyAction::Quit => {
                debug!("Quitting");
                return Ok(Flow::Quit);
            }
            KeyAction::Unrecognized => {
                debug!("Key not recognized, ignoring");
                return Ok(Flow::Continue);
            }
        }

        self.controller.flush()?;
        Ok(Flow::Continue)
    }

    /// Feed actions until one asks to quit or they run out
    pub fn run_script<I>(&mut self, actions: I) -> Result<Flow>
    where
        I: IntoIterator<Item = KeyAction>,
    {
        for action in actions {
            if self.handle(action)? == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    pub fn into_canvas(self) -> C {
        self.controller.into_surface().into_canvas()
    }
}

/// Parse a comma- or whitespace-separated list of action tokens
pub fn parse_script(script: &str) -> Result<Vec<KeyAction>> {
    script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::surface::SurfaceOptions;
    use crate::ui::buffer::{BufferCanvas, CanvasOp};

    fn session(width: u16, height: u16, message: Option<&str>) -> Session<BufferCanvas> {
        let options = SurfaceOptions {
            message: message.map(str::to_string),
            ..Default::default()
        };
        let surface = Surface::new(BufferCanvas::new(width, height), width, height, options).unwrap();
        Session::start(surface, None).unwrap()
    }

    fn flushes(s: &Session<BufferCanvas>) -> usize {
        s.controller()
            .surface()
            .canvas()
            .ops()
            .iter()
            .filter(|op| **op == CanvasOp::Flush)
            .count()
    }

    #[test]
    fn test_start_draws_initial_screen() {
        let s = session(12, 6, Some("help"));
        let text = s.controller().surface().canvas().render_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "help        ");
        assert_eq!(lines[1], " ---------- ");
        assert_eq!(lines[2], " |@       | ");
        assert_eq!(lines[4], " ---------- ");
        assert_eq!(flushes(&s), 1);
    }

    #[test]
    fn test_handle_flushes_once_per_operation() {
        let mut s = session(12, 6, None);
        assert_eq!(s.handle(KeyAction::Move(Direction::Right)).unwrap(), Flow::Continue);
        assert_eq!(flushes(&s), 2);

        // Blocked and unrecognized do nothing at all
        let ops = s.controller().surface().canvas().ops().len();
        assert_eq!(s.handle(KeyAction::Move(Direction::Up)).unwrap(), Flow::Continue);
        assert_eq!(s.handle(KeyAction::Unrecognized).unwrap(), Flow::Continue);
        assert_eq!(s.controller().surface().canvas().ops().len(), ops);

        assert_eq!(s.handle(KeyAction::Clear).unwrap(), Flow::Continue);
        assert_eq!(flushes(&s), 3);
    }

    #[test]
    fn test_quit() {
        let mut s = session(12, 6, None);
        assert_eq!(s.handle(KeyAction::Quit).unwrap(), Flow::Quit);
    }

    #[test]
    fn test_run_script_draws_trail() {
        let mut s = session(12, 6, None);
        let actions = parse_script("right, right down,left").unwrap();
        assert_eq!(s.run_script(actions).unwrap(), Flow::Continue);
        assert_eq!(s.controller().position(), Some(Position::new(3, 3)));

        let canvas = s.into_canvas();
        assert_eq!(canvas.char_at(2, 2), Some('#'));
        assert_eq!(canvas.char_at(3, 2), Some('#'));
        assert_eq!(canvas.char_at(4, 2), Some('#'));
        assert_eq!(canvas.char_at(4, 3), Some('#'));
        assert_eq!(canvas.char_at(3, 3), Some('@'));
    }

    #[test]
    fn test_run_script_stops_at_quit() {
        let mut s = session(12, 6, None);
        let actions = parse_script("r q r r").unwrap();
        assert_eq!(s.run_script(actions).unwrap(), Flow::Quit);
        assert_eq!(s.controller().position(), Some(Position::new(3, 2)));
    }

    #[test]
    fn test_clear_after_drawing() {
        let mut s = session(12, 6, None);
        s.run_script(parse_script("r r d c").unwrap()).unwrap();
        assert_eq!(s.controller().position(), Some(Position::new(2, 2)));
        let canvas = s.into_canvas();
        assert_eq!(canvas.char_at(3, 2), Some(' '));
        assert_eq!(canvas.char_at(4, 3), Some(' '));
        assert_eq!(canvas.char_at(2, 2), Some('@'));
    }

    #[test]
    fn test_parse_script() {
        assert_eq!(
            parse_script(" LEFT,up  Clear\tq ").unwrap(),
            vec![
                KeyAction::Move(Direction::Left),
                KeyAction::Move(Direction::Up),
                KeyAction::Clear,
                KeyAction::Quit,
            ]
        );
        assert!(parse_script("").unwrap().is_empty());
        assert!(matches!(parse_script("left, jump"), Err(SketchError::InvalidArgument(_))));
    }
}
