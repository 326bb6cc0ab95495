//! Terminal input and output.
//!
//! This module provides the collaborators around the drawing core:
//!
//! - **keymapper**: Keyboard events to `KeyAction`
//! - **renderer**: crossterm-backed canvas for the real terminal
//! - **buffer**: In-memory canvas for demo mode and tests

pub mod buffer;
pub mod keymapper;
pub mod renderer;

pub use buffer::BufferCanvas;
pub use keymapper::KeyMapper;
pub use renderer::Renderer;
