//! ZEROX33 Canvas Layer
//!
//! This crate provides the minimal 2-D drawing capability the cube renderer
//! needs, plus the encoders that turn finished frames into files.
//!
//! # Core Concept: Draw Against a Trait
//!
//! Scene code never touches pixels directly. It talks to [`Surface`]:
//! - Shapes (`fill_polygon()`, `fill_rect()`, `fill_ellipse()`, `stroke_ellipse()`)
//! - Pixels (`put_pixel()`, `clear()`)
//! - Post-processing (`blur()`, `additive_blend()`)
//!
//! [`RasterSurface`] implements it over `image` buffers using `imageproc`
//! for rasterization. Tests substitute recording surfaces.
//!
//! # Example
//!
//! ```ignore
//! use zerox_canvas::{Color, RgbSurface, Surface, write_looping_animation};
//!
//! let mut frame = RgbSurface::new(400, 400, Color::gray(12));
//! frame.fill_polygon(&quad, Color::new(91, 51, 51), Some(Color::new(111, 71, 71)));
//! write_looping_animation(&[frame.into_image()], 85, path)?;
//! ```

mod encode;
mod error;
mod raster;
mod surface;
mod types;

pub use encode::{encode_looping_animation, write_looping_animation, write_png};
pub use error::CanvasError;
pub use raster::{RasterSurface, RgbSurface, RgbaSurface, SurfacePixel};
pub use surface::Surface;
pub use types::{Bounds, Color};

/// Re-exported so downstream crates name frames without depending on `image`.
pub use image::{Rgb, RgbImage, Rgba, RgbaImage};
