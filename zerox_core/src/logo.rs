//! The static collection logo: a ringed disc with a "Z" and two dots.

use nalgebra::Point2;
use zerox_canvas::{Bounds, Color, RgbaImage, RgbaSurface, Surface};

/// Logo edge length in pixels.
pub const LOGO_SIZE: u32 = 200;

const RING: Color = Color::gray(34);
const DISC: Color = Color::gray(240);
const INK: Color = Color::gray(26);
const RING_WIDTH: u32 = 7;

/// Draws the logo onto any surface.
pub fn draw_logo<S: Surface>(surface: &mut S) {
    surface.stroke_ellipse(Bounds::new(8.0, 8.0, 192.0, 192.0), RING, RING_WIDTH);
    surface.fill_ellipse(Bounds::new(20.0, 20.0, 180.0, 180.0), DISC);

    surface.fill_rect(Bounds::new(60.0, 50.0, 140.0, 62.0), INK);
    surface.fill_rect(Bounds::new(60.0, 138.0, 140.0, 150.0), INK);
    let diagonal = [
        Point2::new(140.0, 62.0),
        Point2::new(84.0, 138.0),
        Point2::new(60.0, 138.0),
        Point2::new(116.0, 62.0),
    ];
    surface.fill_polygon(&diagonal, INK, None);

    surface.fill_ellipse(Bounds::new(72.0, 154.0, 88.0, 170.0), INK);
    surface.fill_ellipse(Bounds::new(100.0, 154.0, 116.0, 170.0), INK);
}

/// Renders the logo on a transparent background.
pub fn render_logo() -> RgbaImage {
    let mut surface = RgbaSurface::from_image(RgbaImage::new(LOGO_SIZE, LOGO_SIZE));
    draw_logo(&mut surface);
    surface.into_image()
}
