//! Recording surface for observing what the renderer draws.

use nalgebra::Point2;
use zerox_canvas::{Bounds, CanvasError, Color, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    Pixel { x: u32, y: u32, color: Color },
    Polygon { points: Vec<Point2<f64>>, fill: Color, outline: Option<Color> },
    Rect { bounds: Bounds, color: Color },
    Ellipse { bounds: Bounds, color: Color },
    Ring { bounds: Bounds, color: Color, width: u32 },
    Blur(f32),
    Blend { scale: f32, offset: f32 },
}

/// Logs every call instead of rasterizing.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn count(&self, pred: impl Fn(&DrawCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl Surface for RecordingSurface {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn put_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.calls.push(DrawCall::Pixel { x, y, color });
    }

    fn fill_polygon(&mut self, points: &[Point2<f64>], fill: Color, outline: Option<Color>) {
        self.calls.push(DrawCall::Polygon {
            points: points.to_vec(),
            fill,
            outline,
        });
    }

    fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        self.calls.push(DrawCall::Rect { bounds, color });
    }

    fn fill_ellipse(&mut self, bounds: Bounds, color: Color) {
        self.calls.push(DrawCall::Ellipse { bounds, color });
    }

    fn stroke_ellipse(&mut self, bounds: Bounds, color: Color, width: u32) {
        self.calls.push(DrawCall::Ring { bounds, color, width });
    }

    fn blur(&mut self, radius: f32) {
        self.calls.push(DrawCall::Blur(radius));
    }

    fn additive_blend(&mut self, _other: &Self, scale: f32, offset: f32) -> Result<(), CanvasError> {
        self.calls.push(DrawCall::Blend { scale, offset });
        Ok(())
    }
}
