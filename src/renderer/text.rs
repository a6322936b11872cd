//! Character-cell render target for terminals and logs

use std::fmt;

use super::RenderTarget;
use crate::sim::{FillColor, Rect};

const EMPTY: char = '.';
const WHITE: char = ' ';
const BLACK: char = '#';
const OUTLINE: char = '+';

/// A grid of characters, each covering `cell_w` x `cell_h` window units
#[derive(Debug, Clone)]
pub struct TextCanvas {
    cols: usize,
    rows: usize,
    cell_w: f64,
    cell_h: f64,
    cells: Vec<char>,
}

impl TextCanvas {
    pub fn new(window: Rect, cell_w: f64, cell_h: f64) -> Self {
        let cols = (window.width() / cell_w).ceil().max(1.0) as usize;
        let rows = (window.height() / cell_h).ceil().max(1.0) as usize;
        Self {
            cols,
            rows,
            cell_w,
            cell_h,
            cells: vec![EMPTY; cols * rows],
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        (col < self.cols && row < self.rows).then(|| self.cells[row * self.cols + col])
    }

    /// Cell range covered by a rect, clipped to the canvas
    fn span(&self, rect: &Rect) -> Option<(usize, usize, usize, usize)> {
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return None;
        }
        let to_cell = |v: f64, size: f64, limit: usize| (v / size).clamp(0.0, limit as f64);
        let c0 = to_cell(rect.min().x, self.cell_w, self.cols).floor() as usize;
        let r0 = to_cell(rect.min().y, self.cell_h, self.rows).floor() as usize;
        let c1 = to_cell(rect.max().x, self.cell_w, self.cols).ceil() as usize;
        let r1 = to_cell(rect.max().y, self.cell_h, self.rows).ceil() as usize;
        (c0 < c1 && r0 < r1).then_some((c0, r0, c1, r1))
    }
}

impl RenderTarget for TextCanvas {
    fn fill_rect(&mut self, rect: Rect, color: FillColor) {
        let ch = match color {
            FillColor::Black => BLACK,
            FillColor::White => WHITE,
        };
        if let Some((c0, r0, c1, r1)) = self.span(&rect) {
            for row in r0..r1 {
                self.cells[row * self.cols + c0..row * self.cols + c1].fill(ch);
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, _color: FillColor) {
        if let Some((c0, r0, c1, r1)) = self.span(&rect) {
            for row in r0..r1 {
                for col in c0..c1 {
                    let edge = row == r0 || row == r1 - 1 || col == c0 || col == c1 - 1;
                    if edge {
                        self.cells[row * self.cols + col] = OUTLINE;
                    }
                }
            }
        }
    }
}

impl fmt::Display for TextCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line: String = row.iter().collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
