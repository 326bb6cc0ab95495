//! In-memory canvas
//!
//! Keeps a character grid plus a log of every call made on it. Used by the
//! scripted demo mode to print a drawing without a real terminal, and by the
//! tests to check what was painted and in which order.

use std::io;

use crate::core::{Canvas, ColorPair};

/// One call recorded by `BufferCanvas`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasOp {
    Clear,
    Char {
        x: u16,
        y: u16,
        ch: char,
        colors: Option<ColorPair>,
    },
    Str {
        x: u16,
        y: u16,
        text: String,
    },
    Flush,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BufferCell {
    ch: char,
    colors: Option<ColorPair>,
}

impl Default for BufferCell {
    fn default() -> Self {
        Self { ch: ' ', colors: None }
    }
}

pub struct BufferCanvas {
    width: u16,
    height: u16,
    cells: Vec<Vec<BufferCell>>,
    ops: Vec<CanvasOp>,
}

impl BufferCanvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![BufferCell::default(); width as usize]; height as usize],
            ops: Vec::new(),
        }
    }

    pub fn char_at(&self, x: u16, y: u16) -> Option<char> {
        self.cell(x, y).map(|c| c.ch)
    }

    #[allow(dead_code)]
    pub fn colors_at(&self, x: u16, y: u16) -> Option<ColorPair> {
        self.cell(x, y).and_then(|c| c.colors)
    }

    /// Every call made so far, oldest first
    #[allow(dead_code)]
    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    /// Colored single-cell writes, i.e. trail and head paints
    #[allow(dead_code)]
    pub fn paints(&self) -> impl Iterator<Item = &CanvasOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, CanvasOp::Char { colors: Some(_), .. }))
    }

    /// The grid as text, one line per row
    pub fn render_text(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.ch).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn cell(&self, x: u16, y: u16) -> Option<&BufferCell> {
        self.cells.get(y as usize)?.get(x as usize)
    }

    fn out_of_range(&self, x: u16, y: u16) -> io::Error {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("cell ({}, {}) is outside the {}x{} buffer", x, y, self.width, self.height),
        )
    }
}

impl Canvas for BufferCanvas {
    fn clear(&mut self) -> io::Result<()> {
        for row in &mut self.cells {
            row.fill(BufferCell::default());
        }
        self.ops.push(CanvasOp::Clear);
        Ok(())
    }

    fn put_char(&mut self, x: u16, y: u16, ch: char, colors: Option<ColorPair>) -> io::Result<()> {
        if x >= self.width || y >= self.height {
            return Err(self.out_of_range(x, y));
        }
        self.cells[y as usize][x as usize] = BufferCell { ch, colors };
        self.ops.push(CanvasOp::Char { x, y, ch, colors });
        Ok(())
    }

    /// Writes past the right edge are clipped
    fn put_str(&mut self, x: u16, y: u16, text: &str) -> io::Result<()> {
        if y >= self.height || x >= self.width {
            return Err(self.out_of_range(x, y));
        }
        let row = &mut self.cells[y as usize];
        for (cell, ch) in row[x as usize..].iter_mut().zip(text.chars()) {
            *cell = BufferCell { ch, colors: None };
        }
        self.ops.push(CanvasOp::Str { x, y, text: text.to_string() });
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.ops.push(CanvasOp::Flush);
        Ok(())
    }
}
