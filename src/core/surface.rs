//! Surface - the drawable region of the terminal
//!
//! The surface owns the display backend (`Canvas`), knows the outer and inner
//! rectangles, and exposes the primitive paint operations the cursor
//! controller builds on. It never flushes on its own; callers flush once per
//! completed operation.

use std::io;

use tracing::debug;
use unicode_width::UnicodeWidthChar;

use super::error::{Result, SketchError};
use super::geometry::{compute_bounds, Margins, Rect};
use super::style::{BorderStyle, ColorPair, PaintStyle, StyleKind};

/// Display backend the surface paints onto
pub trait Canvas {
    /// Blank the whole screen
    fn clear(&mut self) -> io::Result<()>;

    /// Write one character at a cell, optionally colored
    fn put_char(&mut self, x: u16, y: u16, ch: char, colors: Option<ColorPair>) -> io::Result<()>;

    /// Write uncolored text starting at a cell
    fn put_str(&mut self, x: u16, y: u16, text: &str) -> io::Result<()>;

    /// Make everything written so far visible
    fn flush(&mut self) -> io::Result<()>;
}

/// Everything the surface needs besides the canvas and terminal size
#[derive(Debug, Clone)]
pub struct SurfaceOptions {
    pub margins: Margins,
    /// `None` disables the border
    pub border: Option<BorderStyle>,
    pub message: Option<String>,
    pub trail: PaintStyle,
    pub head: PaintStyle,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            margins: Margins::default(),
            border: Some(BorderStyle::default()),
            message: None,
            trail: PaintStyle::default_trail(),
            head: PaintStyle::default_head(),
        }
    }
}

pub struct Surface<C: Canvas> {
    canvas: C,
    width: u16,
    height: u16,
    margins: Margins,
    border: Option<BorderStyle>,
    message: Option<String>,
    trail: PaintStyle,
    head: PaintStyle,
    outer: Rect,
    inner: Rect,
}

impl<C: Canvas> Surface<C> {
    /// Create a surface for a terminal of `width` x `height` cells.
    ///
    /// Fails with `SketchError::Config` if the margins and border leave no
    /// room to draw. Nothing is painted.
    pub fn new(canvas: C, width: u16, height: u16, options: SurfaceOptions) -> Result<Self> {
        let (outer, inner) = compute_bounds(width, height, &options.margins, options.border.is_some())?;
        debug!("Surface bounds: outer={:?} inner={:?}", outer, inner);

        Ok(Self {
            canvas,
            width,
            height,
            margins: options.margins,
            border: options.border,
            message: options.message,
            trail: options.trail,
            head: options.head,
            outer,
            inner,
        })
    }

    /// Recompute both rectangles for new terminal dimensions and margins.
    ///
    /// On failure the previous bounds are kept.
    #[allow(dead_code)]
    pub fn recompute_bounds(&mut self, width: u16, height: u16, margins: Margins) -> Result<(Rect, Rect)> {
        let (outer, inner) = compute_bounds(width, height, &margins, self.border.is_some())?;
        self.width = width;
        self.height = height;
        self.margins = margins;
        self.outer = outer;
        self.inner = inner;
        Ok((outer, inner))
    }

    pub fn outer(&self) -> Rect {
        self.outer
    }

    pub fn inner(&self) -> Rect {
        self.inner
    }

    #[allow(dead_code)]
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn has_border(&self) -> bool {
        self.border.is_some()
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn style(&self, kind: StyleKind) -> PaintStyle {
        match kind {
            StyleKind::Trail => self.trail,
            StyleKind::Head => self.head,
        }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn into_canvas(self) -> C {
        self.canvas
    }

    /// Wipe the display and draw the header message and border
    pub fn render_static(&mut self) -> Result<()> {
        self.canvas.clear()?;
        if let Some(message) = self.message.clone() {
            self.render_message(&message)?;
        }
        if self.border.is_some() {
            self.render_border()?;
        }
        Ok(())
    }

    /// Outline the outer rectangle. No-op when the border is disabled.
    pub fn render_border(&mut self) -> Result<()> {
        let Some(style) = self.border else {
            return Ok(());
        };
        let chars = style.chars();
        let Rect { min_x, max_x, min_y, max_y } = self.outer;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let on_left_or_right = x == min_x || x == max_x;
                let on_top_or_bottom = y == min_y || y == max_y;
                let ch = match (on_left_or_right, on_top_or_bottom) {
                    (true, true) => match (x == min_x, y == min_y) {
                        (true, true) => chars.top_left,
                        (false, true) => chars.top_right,
                        (true, false) => chars.bottom_left,
                        (false, false) => chars.bottom_right,
                    },
                    (false, true) => chars.horizontal,
                    (true, false) => chars.vertical,
                    (false, false) => continue,
                };
                self.canvas.put_char(x, y, ch, None)?;
            }
        }
        Ok(())
    }

    /// Paint one cell with the trail or head style.
    ///
    /// Callers are expected to have checked against the inner rectangle; a
    /// cell outside the outer rectangle is rejected with `OutOfBounds`.
    pub fn paint_cell(&mut self, x: u16, y: u16, kind: StyleKind) -> Result<()> {
        if !self.outer.contains(x, y) {
            return Err(SketchError::OutOfBounds { x, y });
        }
        let style = self.style(kind);
        self.canvas.put_char(x, y, style.glyph, Some(style.colors))?;
        Ok(())
    }

    /// Write a single header line at the top-left, cut to the terminal width
    pub fn render_message(&mut self, text: &str) -> Result<()> {
        let line = text.lines().next().unwrap_or("");
        let line = truncate_to_width(line, self.width as usize);
        if !line.is_empty() {
            self.canvas.put_str(0, 0, &line)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.canvas.flush()?;
        Ok(())
    }
}

/// Longest prefix of `text` that fits in `max_width` terminal columns.
/// Control characters are dropped.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let Some(w) = ch.width() else {
            continue;
        };
        if used + w > max_width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}
