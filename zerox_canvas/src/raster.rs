//! Raster implementation of `Surface` over `image` buffers.

use crate::{Bounds, CanvasError, Color, Surface};
use image::{ImageBuffer, Pixel, Rgb, Rgba};
use imageproc::drawing::{
    draw_filled_ellipse_mut, draw_filled_rect_mut, draw_hollow_ellipse_mut,
    draw_line_segment_mut, draw_polygon_mut,
};
use imageproc::point::Point;
use imageproc::rect::Rect;
use nalgebra::Point2;

/// Pixel formats a `RasterSurface` can be built on.
pub trait SurfacePixel: Pixel<Subpixel = u8> + 'static {
    /// Converts an opaque color into this pixel format.
    fn from_color(color: Color) -> Self;
}

impl SurfacePixel for Rgb<u8> {
    fn from_color(color: Color) -> Self {
        Rgb(color.channels())
    }
}

impl SurfacePixel for Rgba<u8> {
    fn from_color(color: Color) -> Self {
        Rgba([color.r, color.g, color.b, 255])
    }
}

/// Opaque frames for animations.
pub type RgbSurface = RasterSurface<Rgb<u8>>;

/// Frames with transparency (the logo).
pub type RgbaSurface = RasterSurface<Rgba<u8>>;

/// Surface backed by an in-memory `ImageBuffer`.
#[derive(Debug, Clone)]
pub struct RasterSurface<P: SurfacePixel> {
    image: ImageBuffer<P, Vec<u8>>,
}

impl<P: SurfacePixel> RasterSurface<P> {
    /// Creates a surface filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: ImageBuffer::from_pixel(width, height, P::from_color(background)),
        }
    }

    /// Wraps an existing buffer.
    pub fn from_image(image: ImageBuffer<P, Vec<u8>>) -> Self {
        Self { image }
    }

    pub fn image(&self) -> &ImageBuffer<P, Vec<u8>> {
        &self.image
    }

    pub fn into_image(self) -> ImageBuffer<P, Vec<u8>> {
        self.image
    }

    fn stroke_edges(&mut self, points: &[Point2<f64>], color: P) {
        for (i, start) in points.iter().enumerate() {
            let end = points[(i + 1) % points.len()];
            draw_line_segment_mut(
                &mut self.image,
                (start.x as f32, start.y as f32),
                (end.x as f32, end.y as f32),
                color,
            );
        }
    }
}

/// Snaps polygon vertices to the pixel grid and drops repeated vertices,
/// including a closing vertex equal to the first one.
fn snap_polygon(points: &[Point2<f64>]) -> Vec<Point<i32>> {
    let mut snapped: Vec<Point<i32>> = Vec::with_capacity(points.len());
    for p in points {
        let q = Point::new(p.x.round() as i32, p.y.round() as i32);
        if snapped.last() != Some(&q) {
            snapped.push(q);
        }
    }
    while snapped.len() > 1 && snapped.first() == snapped.last() {
        snapped.pop();
    }
    snapped
}

impl<P: SurfacePixel> Surface for RasterSurface<P> {
    fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn clear(&mut self, color: Color) {
        let px = P::from_color(color);
        for pixel in self.image.pixels_mut() {
            *pixel = px;
        }
    }

    fn put_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x < self.image.width() && y < self.image.height() {
            self.image.put_pixel(x, y, P::from_color(color));
        }
    }

    fn fill_polygon(&mut self, points: &[Point2<f64>], fill: Color, outline: Option<Color>) {
        if points.is_empty() {
            return;
        }
        let snapped = snap_polygon(points);
        if snapped.len() >= 3 {
            draw_polygon_mut(&mut self.image, &snapped, P::from_color(fill));
        }
        let edge = outline.unwrap_or(fill);
        if snapped.len() < 3 || outline.is_some() {
            self.stroke_edges(points, P::from_color(edge));
        }
    }

    fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        let x0 = bounds.x0.round() as i32;
        let y0 = bounds.y0.round() as i32;
        let x1 = bounds.x1.round() as i32;
        let y1 = bounds.y1.round() as i32;
        if x1 < x0 || y1 < y0 {
            return;
        }
        let rect = Rect::at(x0, y0).of_size((x1 - x0 + 1) as u32, (y1 - y0 + 1) as u32);
        draw_filled_rect_mut(&mut self.image, rect, P::from_color(color));
    }

    fn fill_ellipse(&mut self, bounds: Bounds, color: Color) {
        let c = bounds.center();
        draw_filled_ellipse_mut(
            &mut self.image,
            (c.x.round() as i32, c.y.round() as i32),
            (bounds.width() / 2.0).round() as i32,
            (bounds.height() / 2.0).round() as i32,
            P::from_color(color),
        );
    }

    fn stroke_ellipse(&mut self, bounds: Bounds, color: Color, width: u32) {
        let c = bounds.center();
        let rx = bounds.width() / 2.0;
        let ry = bounds.height() / 2.0;

        if width <= 1 {
            draw_hollow_ellipse_mut(
                &mut self.image,
                (c.x.round() as i32, c.y.round() as i32),
                rx.round() as i32,
                ry.round() as i32,
                P::from_color(color),
            );
            return;
        }

        // Thick rings: pixel-center test against the outer and inner ellipse.
        let w = f64::from(width);
        let (irx, iry) = (rx - w, ry - w);
        let (img_w, img_h) = self.image.dimensions();
        let x_lo = bounds.x0.floor().max(0.0) as u32;
        let y_lo = bounds.y0.floor().max(0.0) as u32;
        let x_hi = (bounds.x1.ceil().max(0.0) as u32).min(img_w.saturating_sub(1));
        let y_hi = (bounds.y1.ceil().max(0.0) as u32).min(img_h.saturating_sub(1));
        let px = P::from_color(color);

        for y in y_lo..=y_hi {
            for x in x_lo..=x_hi {
                let dx = f64::from(x) - c.x;
                let dy = f64::from(y) - c.y;
                let outer = (dx / rx).powi(2) + (dy / ry).powi(2) <= 1.0;
                let inner = irx > 0.0
                    && iry > 0.0
                    && (dx / irx).powi(2) + (dy / iry).powi(2) < 1.0;
                if outer && !inner {
                    self.image.put_pixel(x, y, px);
                }
            }
        }
    }

    fn blur(&mut self, radius: f32) {
        if radius > 0.0 {
            self.image = image::imageops::blur(&self.image, radius);
        }
    }

    fn additive_blend(&mut self, other: &Self, scale: f32, offset: f32) -> Result<(), CanvasError> {
        if self.image.dimensions() != other.image.dimensions() {
            return Err(CanvasError::mismatch(
                self.image.dimensions(),
                other.image.dimensions(),
            ));
        }
        for (dst, src) in self.image.pixels_mut().zip(other.image.pixels()) {
            for (d, s) in dst.channels_mut().iter_mut().zip(src.channels()) {
                let v = (f32::from(*d) + f32::from(*s)) / scale + offset;
                *d = v.clamp(0.0, 255.0) as u8;
            }
        }
        Ok(())
    }
}
