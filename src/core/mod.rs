//! Drawing core.
//!
//! This module contains the bounded-cursor drawing logic:
//!
//! - **geometry**: Rectangles, margins and the bounds computation
//! - **style**: Trail/head paint styles, colors and border glyphs
//! - **surface**: The drawable region and the `Canvas` backend trait
//! - **cursor**: The cursor controller (unset/placed state machine)
//! - **session**: Key actions applied to a controller, one flush per action
//!
//! # Architecture
//!
//! ```text
//! Session
//! └── CursorController (cursor state + initial position)
//!     └── Surface (outer/inner Rect, styles, header, border)
//!         └── Canvas (terminal or in-memory buffer)
//! ```

pub mod cursor;
pub mod error;
pub mod geometry;
pub mod session;
pub mod style;
pub mod surface;

pub use cursor::Direction;
pub use error::SketchError;
pub use geometry::{Margins, Position};
pub use session::{parse_script, Flow, KeyAction, Session};
pub use style::{BorderStyle, ColorPair, PaintStyle, TermColor};
pub use surface::{Canvas, Surface, SurfaceOptions};
