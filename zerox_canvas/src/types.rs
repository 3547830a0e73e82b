//! Value types shared by every surface implementation.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);

    /// Creates a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates an achromatic color.
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Adds `delta` to every channel, saturating at 255.
    pub fn brighten(self, delta: u8) -> Self {
        Self::new(
            self.r.saturating_add(delta),
            self.g.saturating_add(delta),
            self.b.saturating_add(delta),
        )
    }

    /// Subtracts `delta` from every channel, flooring at 0.
    pub fn darken(self, delta: u8) -> Self {
        Self::new(
            self.r.saturating_sub(delta),
            self.g.saturating_sub(delta),
            self.b.saturating_sub(delta),
        )
    }

    /// Shifts every channel by a signed amount, clamped to [0, 255].
    pub fn shift(self, delta: i32) -> Self {
        let ch = |c: u8| (i32::from(c) + delta).clamp(0, 255) as u8;
        Self::new(ch(self.r), ch(self.g), ch(self.b))
    }

    /// Integer half of every channel.
    pub fn halve(self) -> Self {
        Self::new(self.r / 2, self.g / 2, self.b / 2)
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// `#rrggbb` form used in the catalog manifest.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// Axis-aligned box in pixel space, inclusive on both corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Bounds {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Box of the given radii around a center point.
    pub fn around(center: Point2<f64>, rx: f64, ry: f64) -> Self {
        Self::new(center.x - rx, center.y - ry, center.x + rx, center.y + ry)
    }

    /// Square box around a center point.
    pub fn circle(center: Point2<f64>, radius: f64) -> Self {
        Self::around(center, radius, radius)
    }

    pub fn center(&self) -> Point2<f64> {
        Point2::new((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }
}
