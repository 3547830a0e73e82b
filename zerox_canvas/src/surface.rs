//! The drawing capability interface the renderer is written against.

use crate::{Bounds, CanvasError, Color};
use nalgebra::Point2;

/// A 2-D raster target.
///
/// The frame composer and face renderer only ever talk to this trait, so
/// the rasterizer behind it can be swapped without touching the scene code.
///
/// # Implementations
///
/// - **Raster**: `RasterSurface` - `image` buffers rasterized by `imageproc`
/// - **Tests**: recording doubles that log calls instead of drawing
pub trait Surface {
    /// Returns `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Paints every pixel with `color`.
    fn clear(&mut self, color: Color);

    /// Sets a single pixel. Out-of-range coordinates are ignored.
    fn put_pixel(&mut self, x: u32, y: u32, color: Color);

    /// Fills a closed polygon, then strokes its edges with `outline` if given.
    ///
    /// Degenerate polygons (fewer than three distinct vertices after
    /// snapping to the pixel grid) only receive the outline.
    fn fill_polygon(&mut self, points: &[Point2<f64>], fill: Color, outline: Option<Color>);

    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, bounds: Bounds, color: Color);

    /// Fills the ellipse inscribed in `bounds`.
    fn fill_ellipse(&mut self, bounds: Bounds, color: Color);

    /// Strokes the ellipse inscribed in `bounds`, `width` pixels thick,
    /// growing inward from the bounds.
    fn stroke_ellipse(&mut self, bounds: Bounds, color: Color, width: u32);

    /// Gaussian blur with the given radius.
    fn blur(&mut self, radius: f32);

    /// Adds `other` onto `self` channel-wise: `clip((a + b) / scale + offset)`.
    fn additive_blend(&mut self, other: &Self, scale: f32, offset: f32) -> Result<(), CanvasError>
    where
        Self: Sized;
}
