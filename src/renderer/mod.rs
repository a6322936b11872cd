//! Render adapter
//!
//! The core never rasterizes. A `RenderTarget` receives filled and outlined
//! rectangles in window coordinates, in back-to-front order.

pub mod instance;
pub mod text;

pub use instance::{InstanceBuffer, RectInstance};
pub use text::TextCanvas;

use crate::sim::{FillColor, FrameSnapshot, Rect};

/// Something that can draw axis-aligned rectangles
pub trait RenderTarget {
    fn fill_rect(&mut self, rect: Rect, color: FillColor);
    fn stroke_rect(&mut self, rect: Rect, color: FillColor);
}

/// Draw a frame: seconds bar, hour frame backdrop, then every cube with its outline
pub fn draw_snapshot<T: RenderTarget + ?Sized>(target: &mut T, snapshot: &FrameSnapshot) {
    for part in [&snapshot.seconds, &snapshot.background] {
        if part.fill_height > 0.0 {
            target.fill_rect(part.rect(), part.color);
        }
    }

    for cube in &snapshot.cubes {
        // Unfilled cubes have nothing to show
        if cube.fill_height <= 0.0 {
            continue;
        }
        target.fill_rect(cube.rect(), cube.color);
        if cube.outlined {
            target.stroke_rect(cube.rect(), FillColor::White);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{CubeClock, WallTime};

    #[derive(Default)]
    struct Recorder {
        fills: Vec<(Rect, FillColor)>,
        strokes: Vec<Rect>,
    }

    impl RenderTarget for Recorder {
        fn fill_rect(&mut self, rect: Rect, color: FillColor) {
            self.fills.push((rect, color));
        }

        fn stroke_rect(&mut self, rect: Rect, _color: FillColor) {
            self.strokes.push(rect);
        }
    }

    #[test]
    fn test_draw_order_and_counts() {
        let mut clock = CubeClock::with_seed(10);
        clock.on_second_tick(WallTime::new(5, 30, 15));
        let snapshot = clock.snapshot();

        let mut rec = Recorder::default();
        draw_snapshot(&mut rec, &snapshot);

        // seconds + background + 5 hour cubes + 1 minute cube
        assert_eq!(rec.fills.len(), 2 + 6);
        assert_eq!(rec.strokes.len(), 6);
        assert_eq!(rec.fills[0].0, snapshot.seconds.rect());
        assert_eq!(rec.fills[1], (snapshot.background.rect(), FillColor::White));
    }

    #[test]
    fn test_second_zero_skips_bar() {
        let mut clock = CubeClock::with_seed(10);
        clock.on_second_tick(WallTime::new(0, 0, 0));

        let mut rec = Recorder::default();
        draw_snapshot(&mut rec, &clock.snapshot());
        // Midnight, minute 0: only the backdrop
        assert_eq!(rec.fills.len(), 1);
        assert!(rec.strokes.is_empty());
    }
}
