//! Paint styles, colors and border glyph sets.

use serde::{Deserialize, Serialize};

/// The eight classic terminal colors plus the terminal default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermColor {
    Reset,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl TermColor {
    /// Convert to crossterm Color
    pub fn to_crossterm(self) -> crossterm::style::Color {
        use crossterm::style::Color;
        match self {
            TermColor::Reset => Color::Reset,
            TermColor::Black => Color::Black,
            TermColor::Red => Color::DarkRed,
            TermColor::Green => Color::DarkGreen,
            TermColor::Yellow => Color::DarkYellow,
            TermColor::Blue => Color::DarkBlue,
            TermColor::Magenta => Color::DarkMagenta,
            TermColor::Cyan => Color::DarkCyan,
            TermColor::White => Color::Grey,
        }
    }
}

/// Foreground/background pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub fg: TermColor,
    pub bg: TermColor,
}

impl ColorPair {
    pub const fn new(fg: TermColor, bg: TermColor) -> Self {
        Self { fg, bg }
    }
}

/// Which of the two cell styles to paint with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKind {
    /// A cell the cursor has left
    Trail,
    /// The cursor's current cell
    Head,
}

/// Glyph and colors used for one kind of cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintStyle {
    pub glyph: char,
    pub colors: ColorPair,
}

impl PaintStyle {
    pub const fn new(glyph: char, colors: ColorPair) -> Self {
        Self { glyph, colors }
    }

    pub fn default_trail() -> Self {
        Self::new('#', ColorPair::new(TermColor::White, TermColor::Blue))
    }

    pub fn default_head() -> Self {
        Self::new('@', ColorPair::new(TermColor::White, TermColor::Green))
    }
}

/// Border drawing style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    Ascii,
    Single,
    Double,
    Rounded,
}

/// Glyphs for one border style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderStyle {
    pub fn chars(self) -> BorderChars {
        match self {
            // Dash-and-pipe box: corners belong to the rows
            BorderStyle::Ascii => BorderChars {
                top_left: '-',
                top_right: '-',
                bottom_left: '-',
                bottom_right: '-',
                horizontal: '-',
                vertical: '|',
            },
            BorderStyle::Single => BorderChars {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '─',
                vertical: '│',
            },
            BorderStyle::Double => BorderChars {
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                horizontal: '═',
                vertical: '║',
            },
            BorderStyle::Rounded => BorderChars {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                horizontal: '─',
                vertical: '│',
            },
        }
    }
}
