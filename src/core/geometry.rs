//! Rectangles, margins and cell positions.
//!
//! All coordinates are terminal cells, zero-based, with `x` the column and
//! `y` the row. Rectangle bounds are inclusive on both ends.

use serde::{Deserialize, Serialize};

use super::error::{Result, SketchError};

/// A cell position on the terminal
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Space left free between the terminal edge and the drawing area
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: u16,
    pub bottom: u16,
    pub left: u16,
    pub right: u16,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 1,
            bottom: 1,
            left: 1,
            right: 1,
        }
    }
}

/// Inclusive rectangle. Invariant: `min_x <= max_x` and `min_y <= max_y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub min_x: u16,
    pub max_x: u16,
    pub min_y: u16,
    pub max_y: u16,
}

impl Rect {
    /// Build a rectangle from signed bounds, rejecting empty or inverted ones
    fn from_bounds(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Option<Self> {
        if min_x < 0 || min_y < 0 || max_x < min_x || max_y < min_y {
            return None;
        }
        Some(Self {
            min_x: u16::try_from(min_x).ok()?,
            max_x: u16::try_from(max_x).ok()?,
            min_y: u16::try_from(min_y).ok()?,
            max_y: u16::try_from(max_y).ok()?,
        })
    }

    pub fn width(&self) -> u16 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> u16 {
        self.max_y - self.min_y + 1
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }

    pub fn contains_position(&self, pos: Position) -> bool {
        self.contains(pos.x, pos.y)
    }

    /// Shrink by `amount` cells on every side; `None` if nothing is left
    pub fn shrink(&self, amount: u16) -> Option<Self> {
        let amount = i32::from(amount);
        Self::from_bounds(
            i32::from(self.min_x) + amount,
            i32::from(self.max_x) - amount,
            i32::from(self.min_y) + amount,
            i32::from(self.max_y) - amount,
        )
    }

    /// Top-left cell
    pub fn origin(&self) -> Position {
        Position::new(self.min_x, self.min_y)
    }
}

/// Compute the outer (decorated) and inner (cursor-legal) rectangles for a
/// terminal of `width` x `height` cells.
pub fn compute_bounds(width: u16, height: u16, margins: &Margins, border: bool) -> Result<(Rect, Rect)> {
    let outer = Rect::from_bounds(
        i32::from(margins.left),
        i32::from(width) - 1 - i32::from(margins.right),
        i32::from(margins.top),
        i32::from(height) - 1 - i32::from(margins.bottom),
    )
    .ok_or_else(|| {
        SketchError::Config(format!(
            "terminal {}x{} is too small for margins {:?}",
            width, height, margins
        ))
    })?;

    let inner = if border {
        outer.shrink(1).ok_or_else(|| {
            SketchError::Config(format!(
                "no room inside the border: drawing area is {}x{}",
                outer.width(),
                outer.height()
            ))
        })?
    } else {
        outer
    };

    Ok((outer, inner))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn margins(top: u16, bottom: u16, left: u16, right: u16) -> Margins {
        Margins { top, bottom, left, right }
    }

    #[test]
    fn test_bounds_without_border() {
        let (outer, inner) = compute_bounds(80, 24, &margins(1, 1, 1, 1), false).unwrap();
        assert_eq!(outer, Rect { min_x: 1, max_x: 78, min_y: 1, max_y: 22 });
        assert_eq!(inner, outer);
    }

    #[test]
    fn test_bounds_with_border() {
        let (outer, inner) = compute_bounds(80, 24, &margins(2, 0, 3, 1), true).unwrap();
        assert_eq!(outer, Rect { min_x: 3, max_x: 78, min_y: 2, max_y: 23 });
        assert_eq!(inner, Rect { min_x: 4, max_x: 77, min_y: 3, max_y: 22 });
    }

    #[test]
    fn test_inner_strictly_inside_outer() {
        for width in 3..20u16 {
            for height in 3..12u16 {
                for m in 0..3u16 {
                    let margins = margins(m, m, m, m);
                    if let Ok((outer, inner)) = compute_bounds(width, height, &margins, true) {
                        assert!(inner.min_x > outer.min_x && inner.max_x < outer.max_x);
                        assert!(inner.min_y > outer.min_y && inner.max_y < outer.max_y);
                    }
                    if let Ok((outer, inner)) = compute_bounds(width, height, &margins, false) {
                        assert_eq!(outer, inner);
                    }
                }
            }
        }
    }

    #[test]
    fn test_too_small_is_config_error() {
        // Margins eat the whole width
        let err = compute_bounds(4, 24, &margins(0, 0, 2, 2), false).unwrap_err();
        assert!(matches!(err, SketchError::Config(_)));

        // Outer is a single row, nothing left inside a border
        let err = compute_bounds(80, 3, &margins(1, 1, 0, 0), true).unwrap_err();
        assert!(matches!(err, SketchError::Config(_)));

        // Zero-sized terminal
        let err = compute_bounds(0, 0, &Margins::default(), false).unwrap_err();
        assert!(matches!(err, SketchError::Config(_)));
    }

    #[test]
    fn test_single_cell_area() {
        let (outer, inner) = compute_bounds(3, 3, &margins(1, 1, 1, 1), false).unwrap();
        assert_eq!(outer.width(), 1);
        assert_eq!(outer.height(), 1);
        assert_eq!(inner.origin(), Position::new(1, 1));
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect { min_x: 2, max_x: 10, min_y: 2, max_y: 5 };
        assert!(rect.contains(2, 2));
        assert!(rect.contains(10, 5));
        assert!(!rect.contains(1, 3));
        assert!(!rect.contains(3, 6));
        assert!(rect.shrink(3).is_none());
    }
}
