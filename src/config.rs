//! Configuration for termsketch.
//!
//! Settings come from `~/.termsketch/config.toml` (or the file given with
//! `--config`) and can be overridden on the command line. Every field is
//! optional.
//!
//! # Configuration File
//!
//! ```toml
//! # Header line shown at the top of the screen, "" for none
//! message = "Arrow keys draw, c clears, q quits"
//!
//! [margins]
//! top = 1
//! bottom = 1
//! left = 1
//! right = 1
//!
//! [border]
//! visible = true
//! style = "ascii"     # ascii, single, double, rounded
//!
//! [trail]
//! glyph = "#"
//! fg = "white"
//! bg = "blue"
//!
//! [head]
//! glyph = "@"
//! fg = "white"
//! bg = "green"
//!
//! # Where the cursor starts and returns to on clear
//! [cursor]
//! x = 2
//! y = 2
//!
//! [log]
//! file = "/tmp/termsketch.log"
//! level = "debug"
//! ```
//!
//! Colors: reset, black, red, green, yellow, blue, magenta, cyan, white.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

use crate::core::{BorderStyle, ColorPair, Margins, PaintStyle, Position, SketchError, SurfaceOptions, TermColor};

pub const DEFAULT_MESSAGE: &str =
    "Use the arrow keys to move around. Type c or C to clear the drawing and start over. Type q or Q to exit.";

/// Main configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Header line; empty shows nothing
    pub message: String,
    pub margins: Margins,
    pub border: BorderConfig,
    /// Trail style, unset fields fall back to `#` white on blue
    pub trail: StyleConfig,
    /// Head style, unset fields fall back to `@` white on green
    pub head: StyleConfig,
    /// Explicit initial cursor cell
    pub cursor: Option<CursorConfig>,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            margins: Margins::default(),
            border: BorderConfig::default(),
            trail: StyleConfig::default(),
            head: StyleConfig::default(),
            cursor: None,
            log: LogConfig::default(),
        }
    }
}

/// Border settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderConfig {
    pub visible: bool,
    pub style: BorderStyle,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            visible: true,
            style: BorderStyle::Ascii,
        }
    }
}

/// Glyph and colors for one cell kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub glyph: Option<char>,
    pub fg: Option<TermColor>,
    pub bg: Option<TermColor>,
}

impl StyleConfig {
    /// Fill unset fields from `base`
    pub fn resolve(&self, base: PaintStyle) -> PaintStyle {
        PaintStyle::new(
            self.glyph.unwrap_or(base.glyph),
            ColorPair::new(self.fg.unwrap_or(base.colors.fg), self.bg.unwrap_or(base.colors.bg)),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorConfig {
    pub x: u16,
    pub y: u16,
}

/// Log settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log file; defaults to `~/.termsketch/termsketch.log`
    pub file: Option<PathBuf>,
    /// Used when `RUST_LOG` is not set
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist and parse. Without one, the default
    /// location is tried and anything wrong with it falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, SketchError> {
        if let Some(path) = path {
            let content = fs::read_to_string(path)
                .map_err(|e| SketchError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
            return Self::from_toml_str(&content);
        }

        if let Some(path) = Self::get_config_path() {
            if path.exists() {
                let loaded = fs::read_to_string(&path)
                    .map_err(|e| SketchError::Config(e.to_string()))
                    .and_then(|content| Self::from_toml_str(&content));
                match loaded {
                    Ok(config) => return Ok(config),
                    Err(e) => eprintln!("Warning: ignoring {}: {}", path.display(), e),
                }
            }
        }
        Ok(Self::default())
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, SketchError> {
        let config: Config =
            toml::from_str(content).map_err(|e| SketchError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the settings the type system cannot
    pub fn validate(&self) -> Result<(), SketchError> {
        for (name, style) in [("trail", &self.trail), ("head", &self.head)] {
            if let Some(glyph) = style.glyph {
                if glyph.width() != Some(1) {
                    return Err(SketchError::Config(format!(
                        "{} glyph {:?} must be a single-width printable character",
                        name, glyph
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn surface_options(&self) -> SurfaceOptions {
        SurfaceOptions {
            margins: self.margins,
            border: self.border.visible.then_some(self.border.style),
            message: (!self.message.is_empty()).then(|| self.message.clone()),
            trail: self.trail.resolve(PaintStyle::default_trail()),
            head: self.head.resolve(PaintStyle::default_head()),
        }
    }

    pub fn initial_cursor(&self) -> Option<Position> {
        self.cursor.map(|c| Position::new(c.x, c.y))
    }

    /// Resolved log file path
    pub fn log_path(&self) -> PathBuf {
        self.log
            .file
            .clone()
            .or_else(|| home_dir().map(|h| h.join(".termsketch").join("termsketch.log")))
            .unwrap_or_else(|| PathBuf::from("termsketch.log"))
    }

    /// Get config file path
    fn get_config_path() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".termsketch").join("config.toml"))
    }
}

// Get home directory
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
