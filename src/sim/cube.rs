//! Cube entities and the hour grid layout

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::{CUBE_COUNT, GRID_COLUMNS, GRID_ROWS};

/// One hour slot: a rectangle filled from the top to `fill_height`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cube {
    /// Position and full size. The origin moves under physics, the size never changes.
    pub frame: Rect,
    /// Distance per physics step
    pub velocity: DVec2,
    /// Currently drawn fill height
    pub fill_height: f64,
    /// Fill height of a fully lit slot
    pub target_height: f64,
}

impl Cube {
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            velocity: DVec2::ZERO,
            fill_height: 0.0,
            target_height: frame.height(),
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.frame.width()
    }

    /// A slot counts as lit as soon as any of it is filled
    #[inline]
    pub fn is_lit(&self) -> bool {
        self.fill_height > 0.0
    }

    /// Fill to the full target height
    pub fn light(&mut self) {
        self.fill_height = self.target_height;
    }

    pub fn clear(&mut self) {
        self.fill_height = 0.0;
    }

    /// Fill a fraction (0-1) of the target height
    pub fn fill_fraction(&mut self, fraction: f64) {
        debug_assert!((0.0..=1.0).contains(&fraction));
        self.fill_height = self.target_height * fraction.clamp(0.0, 1.0);
    }

    /// The filled part of the cube, as drawn
    pub fn filled_rect(&self) -> Rect {
        Rect::new(
            self.frame.origin.x,
            self.frame.origin.y,
            self.width(),
            self.fill_height,
        )
    }
}

/// Slot frames for a 3-column x 4-row grid partitioning `bounds`.
///
/// Slot `i` sits at column `i % 3`, row `i / 3`, in the coordinates of `bounds`.
pub fn grid_layout(bounds: &Rect) -> [Rect; CUBE_COUNT] {
    let w = bounds.width() / GRID_COLUMNS as f64;
    let h = bounds.height() / GRID_ROWS as f64;
    std::array::from_fn(|i| {
        let col = (i % GRID_COLUMNS) as f64;
        let row = (i / GRID_COLUMNS) as f64;
        Rect::new(bounds.origin.x + w * col, bounds.origin.y + h * row, w, h)
    })
}

/// Fresh, unlit cubes laid out on the grid
pub fn layout_cubes(bounds: &Rect) -> [Cube; CUBE_COUNT] {
    grid_layout(bounds).map(Cube::new)
}

/// Number of lit slots
pub fn lit_count(cubes: &[Cube]) -> usize {
    cubes.iter().filter(|c| c.is_lit()).count()
}
