//! Error taxonomy for the drawing core.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SketchError {
    /// The drawable rectangle is empty or inverted, or a setting is unusable.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A place or paint landed outside the legal rectangle.
    #[error("Position ({x}, {y}) is out of bounds")]
    OutOfBounds { x: u16, y: u16 },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to write to display: {0}")]
    Display(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SketchError>;
