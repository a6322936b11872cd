//! Axis-aligned rectangle geometry
//!
//! Vectors are `glam::DVec2`. A rectangle is stored as origin (top-left) plus
//! size, with screen convention: +x right, +y down.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub origin: DVec2,
    /// Width and height, never negative
    pub size: DVec2,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        debug_assert!(width >= 0.0 && height >= 0.0, "negative rect size");
        Self {
            origin: DVec2::new(x, y),
            size: DVec2::new(width.max(0.0), height.max(0.0)),
        }
    }

    /// Rectangle of the given size at (0, 0)
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.size.y
    }

    #[inline]
    pub fn min(&self) -> DVec2 {
        self.origin
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> DVec2 {
        self.origin + self.size
    }

    /// Same rectangle moved by `offset`
    pub fn translated(&self, offset: DVec2) -> Self {
        Self {
            origin: self.origin + offset,
            size: self.size,
        }
    }

    /// Shrink by `left`/`top` and trim `right`/`bottom` from the far edges
    pub fn inset(&self, left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(
            self.origin.x + left,
            self.origin.y + top,
            (self.size.x - left - right).max(0.0),
            (self.size.y - top - bottom).max(0.0),
        )
    }

    pub fn contains_point(&self, p: DVec2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.y >= self.origin.y && p.x <= max.x && p.y <= max.y
    }

    /// True if `other` lies entirely inside this rectangle (edges may touch)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.contains_point(other.min()) && self.contains_point(other.max())
    }

    /// True if the interiors intersect. Touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && b_min.x < a_max.x && a_min.y < b_max.y && b_min.y < a_max.y
    }
}
