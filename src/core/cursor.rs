//! Cursor controller
//!
//! Keeps the drawing cursor inside the surface's inner rectangle and repaints
//! the vacated and occupied cells on every accepted move.

use std::str::FromStr;

use super::error::{Result, SketchError};
use super::geometry::{compute_bounds, Margins, Position, Rect};
use super::style::StyleKind;
use super::surface::{Canvas, Surface};

/// Direction of a cursor move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Unit step as (dx, dy)
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

impl FromStr for Direction {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            other => Err(SketchError::InvalidArgument(format!("unknown direction '{}'", other))),
        }
    }
}

/// Where the cursor is, if anywhere
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorState {
    /// Nothing painted yet since start or the last clear
    Unset,
    Placed(Position),
}

/// Result of a move request
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(Position),
    /// The destination is outside the inner rectangle; nothing changed
    Blocked,
}

impl MoveOutcome {
    #[allow(dead_code)]
    pub fn moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved(_))
    }
}

/// Owns the surface and the single cursor drawing on it
pub struct CursorController<C: Canvas> {
    surface: Surface<C>,
    state: CursorState,
    initial: Position,
}

impl<C: Canvas> CursorController<C> {
    /// Create a controller whose cursor starts, and restarts on clear, at
    /// `initial` (the inner rectangle's top-left when `None`).
    ///
    /// The cursor stays `Unset` until `set_position` or `clear` runs.
    pub fn new(surface: Surface<C>, initial: Option<Position>) -> Result<Self> {
        let inner = surface.inner();
        let initial = initial.unwrap_or_else(|| inner.origin());
        if !inner.contains_position(initial) {
            return Err(SketchError::Config(format!(
                "initial cursor {} is outside the drawing area {:?}",
                initial, inner
            )));
        }

        Ok(Self {
            surface,
            state: CursorState::Unset,
            initial,
        })
    }

    #[allow(dead_code)]
    pub fn state(&self) -> CursorState {
        self.state
    }

    pub fn position(&self) -> Option<Position> {
        match self.state {
            CursorState::Unset => None,
            CursorState::Placed(pos) => Some(pos),
        }
    }

    pub fn initial_position(&self) -> Position {
        self.initial
    }

    pub fn surface(&self) -> &Surface<C> {
        &self.surface
    }

    pub fn flush(&mut self) -> Result<()> {
        self.surface.flush()
    }

    pub fn into_surface(self) -> Surface<C> {
        self.surface
    }

    /// Put the cursor at (x, y) and paint it as the head.
    ///
    /// From `Placed`, the old cell is painted as trail first. The position is
    /// only updated once every paint has succeeded.
    pub fn set_position(&mut self, x: u16, y: u16) -> Result<()> {
        if !self.surface.inner().contains(x, y) {
            return Err(SketchError::OutOfBounds { x, y });
        }

        if let CursorState::Placed(prev) = self.state {
            self.surface.paint_cell(prev.x, prev.y, StyleKind::Trail)?;
        }
        self.surface.paint_cell(x, y, StyleKind::Head)?;

        self.state = CursorState::Placed(Position::new(x, y));
        Ok(())
    }

    /// Move `distance` cells towards `direction`.
    ///
    /// Returns `Blocked` without painting when the destination would leave
    /// the inner rectangle.
    pub fn move_cursor(&mut self, direction: Direction, distance: u16) -> Result<MoveOutcome> {
        if distance < 1 {
            return Err(SketchError::InvalidArgument(format!(
                "distance ({}) must be greater than zero",
                distance
            )));
        }
        let CursorState::Placed(current) = self.state else {
            return Err(SketchError::InvalidArgument(
                "cursor has not been placed".to_string(),
            ));
        };

        let Some(target) = self.offset(current, direction, distance) else {
            return Ok(MoveOutcome::Blocked);
        };

        self.set_position(target.x, target.y)?;
        Ok(MoveOutcome::Moved(target))
    }

    /// Redraw the static decoration and restart the cursor at its initial
    /// position, forgetting the old trail.
    pub fn clear(&mut self) -> Result<()> {
        self.state = CursorState::Unset;
        self.surface.render_static()?;
        self.set_position(self.initial.x, self.initial.y)
    }

    /// Recompute the surface bounds for new terminal dimensions and margins.
    ///
    /// Rejected with `SketchError::Config`, leaving everything unchanged, when
    /// the placed cursor or the initial position would fall outside the new
    /// inner rectangle. Nothing is repainted.
    #[allow(dead_code)]
    pub fn recompute_bounds(&mut self, width: u16, height: u16, margins: Margins) -> Result<(Rect, Rect)> {
        let (_, inner) = compute_bounds(width, height, &margins, self.surface.has_border())?;

        let mut cells = vec![("initial position", self.initial)];
        if let CursorState::Placed(pos) = self.state {
            cells.push(("cursor", pos));
        }
        for (what, pos) in cells {
            if !inner.contains_position(pos) {
                return Err(SketchError::Config(format!(
                    "{} {} would be outside the resized drawing area {:?}",
                    what, pos, inner
                )));
            }
        }

        self.surface.recompute_bounds(width, height, margins)
    }

    /// Candidate cell, or `None` if it falls outside the inner rectangle
    fn offset(&self, from: Position, direction: Direction, distance: u16) -> Option<Position> {
        let (dx, dy) = direction.delta();
        let x = i32::from(from.x) + dx * i32::from(distance);
        let y = i32::from(from.y) + dy * i32::from(distance);
        let pos = Position::new(u16::try_from(x).ok()?, u16::try_from(y).ok()?);
        self.surface.inner().contains_position(pos).then_some(pos)
    }
}
