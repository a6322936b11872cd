//! Instance data for GPU-style rect rendering

use bytemuck::{Pod, Zeroable};

use super::RenderTarget;
use crate::sim::{FillColor, Rect};

/// One solid rectangle: position, size and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct RectInstance {
    pub origin: [f32; 2],
    pub size: [f32; 2],
    pub color: [f32; 4],
}

impl RectInstance {
    pub fn new(rect: Rect, color: [f32; 4]) -> Self {
        Self {
            origin: rect.origin.as_vec2().to_array(),
            size: rect.size.as_vec2().to_array(),
            color,
        }
    }
}

/// Colors for clock elements
pub mod colors {
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

pub fn color_rgba(color: FillColor) -> [f32; 4] {
    match color {
        FillColor::Black => colors::BLACK,
        FillColor::White => colors::WHITE,
    }
}

/// Collects draw calls as rect instances; outlines become four thin rects
#[derive(Debug, Clone)]
pub struct InstanceBuffer {
    pub instances: Vec<RectInstance>,
    /// Outline thickness in window units
    pub line_width: f64,
}

impl Default for InstanceBuffer {
    fn default() -> Self {
        Self {
            instances: Vec::new(),
            line_width: 1.0,
        }
    }
}

impl InstanceBuffer {
    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Raw bytes for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl RenderTarget for InstanceBuffer {
    fn fill_rect(&mut self, rect: Rect, color: FillColor) {
        self.instances.push(RectInstance::new(rect, color_rgba(color)));
    }

    fn stroke_rect(&mut self, rect: Rect, color: FillColor) {
        let rgba = color_rgba(color);
        let lw = self.line_width.min(rect.width()).min(rect.height());
        let (min, max) = (rect.min(), rect.max());
        let edges = [
            Rect::new(min.x, min.y, rect.width(), lw),
            Rect::new(min.x, max.y - lw, rect.width(), lw),
            Rect::new(min.x, min.y, lw, rect.height()),
            Rect::new(max.x - lw, min.y, lw, rect.height()),
        ];
        self.instances
            .extend(edges.into_iter().map(|edge| RectInstance::new(edge, rgba)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::draw_snapshot;
    use crate::sim::{CubeClock, WallTime};

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<RectInstance>(), 32);
        let mut buffer = InstanceBuffer::default();
        buffer.fill_rect(Rect::new(1.0, 2.0, 3.0, 4.0), FillColor::Black);
        assert_eq!(buffer.as_bytes().len(), 32);
        assert_eq!(buffer.instances[0].origin, [1.0, 2.0]);
        assert_eq!(buffer.instances[0].size, [3.0, 4.0]);
    }

    #[test]
    fn test_stroke_is_four_edges() {
        let mut buffer = InstanceBuffer::default();
        buffer.stroke_rect(Rect::new(10.0, 10.0, 20.0, 30.0), FillColor::White);
        assert_eq!(buffer.instances.len(), 4);
        assert!(buffer.instances.iter().all(|i| i.color == colors::WHITE));
        assert_eq!(buffer.instances[3].origin, [29.0, 10.0]);
    }

    #[test]
    fn test_snapshot_instances() {
        let mut clock = CubeClock::with_seed(6);
        clock.on_second_tick(WallTime::new(14, 45, 20));

        let mut buffer = InstanceBuffer::default();
        draw_snapshot(&mut buffer, &clock.snapshot());
        // seconds + backdrop + (2 hour + 1 minute) * (fill + 4 edges)
        assert_eq!(buffer.instances.len(), 2 + 3 * 5);
    }
}
