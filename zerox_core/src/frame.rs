//! The frame composer: every frame of one catalog item's animation.
//!
//! Per item, a seeded RNG fixes the cube sizes, spin speeds and wobble once.
//! Per frame, the composer lays down:
//! 1. the background (plus speckle and watermark for rare items)
//! 2. the outer cube
//! 3. the counter-rotating inner cube
//! 4. two pulsing glow rings, blurred on their own canvas and added on top

use crate::catalog::CatalogItem;
use crate::color::Palette;
use crate::config::RenderConfig;
use crate::geometry::Rotation;
use crate::renderer::render_cube;
use crate::RenderError;
use nalgebra::Point2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use std::ops::RangeInclusive;
use tracing::debug;
use zerox_canvas::{Bounds, Color, RgbImage, RgbSurface, Surface};

/// Speckle pixels per rare frame.
pub const SPECKLE_COUNT: usize = 400;

/// Per-speckle brightness shift relative to the background.
const SPECKLE_SHIFT: RangeInclusive<i32> = -25..=5;

/// The scene sits this far above the canvas center.
const CENTER_LIFT: f64 = 8.0;

/// The watermark sits this far below the scene center.
const WATERMARK_DROP: f64 = 5.0;

const GLOW_BLUR_RADIUS: f32 = 2.0;
const GLOW_BLEND_SCALE: f32 = 3.0;

/// Animation parameters fixed for the whole life of one item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemParams {
    /// Outer cube half-extent, [62, 85]
    pub outer_extent: u32,

    /// Inner cube half-extent, 30-48% of the outer
    pub inner_extent: f64,

    /// Outer revolutions per loop, [0.75, 1.25)
    pub rotation_speed: f64,

    /// Tilt wobble amplitude about X
    pub wobble_x: f64,

    /// Tilt wobble amplitude about Z
    pub wobble_z: f64,

    /// Base tilt about X
    pub tilt: f64,

    /// Inner spin relative to the outer, [1.1, 1.7)
    pub inner_speed: f64,
}

impl ItemParams {
    /// Draws the parameters from the item's seeded RNG.
    ///
    /// The draw order is part of the output: changing it changes every item.
    pub fn derive(item: &CatalogItem) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(item.seed());
        let outer_extent: u32 = rng.gen_range(62..=85);
        let inner_extent = f64::from(outer_extent) * (0.30 + rng.gen::<f64>() * 0.18);
        let rotation_speed = 0.75 + rng.gen::<f64>() * 0.5;
        let wobble_x = 0.15 + rng.gen::<f64>() * 0.25;
        let wobble_z = 0.05 + rng.gen::<f64>() * 0.15;
        let tilt = rng.gen::<f64>() * 0.4 + 0.3;
        let inner_speed = 1.1 + rng.gen::<f64>() * 0.6;

        Self {
            outer_extent,
            inner_extent,
            rotation_speed,
            wobble_x,
            wobble_z,
            tilt,
            inner_speed,
        }
    }

    /// Outer cube orientation at loop time `t` in [0, 1).
    pub fn outer_rotation(&self, t: f64) -> Rotation {
        let phase = t * TAU;
        Rotation::new(
            phase.sin() * self.wobble_x + self.tilt,
            phase * self.rotation_speed,
            phase.cos() * self.wobble_z,
        )
    }

    /// Inner cube orientation: damped tilt, reversed and faster spin.
    pub fn inner_rotation(&self, outer: Rotation) -> Rotation {
        Rotation::new(
            outer.ax * 0.65 + 0.15,
            -outer.ay * self.inner_speed,
            outer.az * 0.3,
        )
    }

    /// Glow ring radii at loop time `t`, truncated to whole pixels.
    pub fn ring_radii(&self, t: f64) -> (i32, i32) {
        let outer = f64::from(self.outer_extent);
        let r1 = outer * 1.8 + (t * 4.0 * PI).sin() * 6.0;
        let r2 = outer * 2.15 + (t * 4.0 * PI).cos() * 5.0;
        (r1 as i32, r2 as i32)
    }
}

/// Scatters `count` pixels shaded slightly off `base`, reproducibly per `seed`.
pub fn draw_speckle<S: Surface>(surface: &mut S, base: Color, count: usize, seed: u64) {
    let (w, h) = surface.dimensions();
    if w == 0 || h == 0 {
        return;
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for _ in 0..count {
        let x = rng.gen_range(0..w);
        let y = rng.gen_range(0..h);
        let shift = rng.gen_range(SPECKLE_SHIFT);
        surface.put_pixel(x, y, base.shift(shift));
    }
}

/// Draws the "Z" watermark glyph of half-size `size` around `center`.
pub fn draw_watermark<S: Surface>(surface: &mut S, center: Point2<f64>, size: f64, color: Color) {
    let (cx, cy, sz) = (center.x, center.y, size);
    let bar = sz * 0.18;

    surface.fill_rect(Bounds::new(cx - sz, cy - sz, cx + sz, cy - sz + bar), color);
    surface.fill_rect(Bounds::new(cx - sz, cy + sz - bar, cx + sz, cy + sz), color);

    let diagonal = [
        Point2::new(cx + sz, cy - sz + bar),
        Point2::new(cx + sz - bar * 0.5, cy - sz + bar),
        Point2::new(cx - sz, cy + sz - bar),
        Point2::new(cx - sz + bar * 0.5, cy + sz - bar),
    ];
    surface.fill_polygon(&diagonal, color, None);

    let dot_r = sz * 0.07;
    let dot_y = cy + sz + dot_r * 2.0;
    for dx in [-0.35, -0.05] {
        surface.fill_ellipse(Bounds::circle(Point2::new(cx + sz * dx, dot_y), dot_r), color);
    }
}

/// Composes the frames of one catalog item.
pub struct FrameComposer<'a> {
    config: &'a RenderConfig,
    item: CatalogItem,
    trait_name: &'a str,
    palette: Palette,
    params: ItemParams,
}

impl<'a> FrameComposer<'a> {
    /// Resolves the item's trait and derives its palette and parameters.
    pub fn new(config: &'a RenderConfig, item: CatalogItem) -> Result<Self, RenderError> {
        let def = config.trait_of(&item)?;
        Ok(Self {
            config,
            item,
            trait_name: &def.name,
            palette: Palette::for_trait(def, item.variation),
            params: ItemParams::derive(&item),
        })
    }

    pub fn item(&self) -> CatalogItem {
        self.item
    }

    pub fn trait_name(&self) -> &str {
        self.trait_name
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn params(&self) -> &ItemParams {
        &self.params
    }

    /// Scene center: horizontally centered, lifted slightly.
    pub fn center(&self) -> Point2<f64> {
        let half = f64::from(self.config.canvas_size / 2);
        Point2::new(half, half - CENTER_LIFT)
    }

    /// Normalized loop time of a frame, in [0, 1).
    pub fn time(&self, frame: u32) -> f64 {
        f64::from(frame) / f64::from(self.config.frame_count)
    }

    /// Background, rare texture and both cubes.
    pub fn paint_scene<S: Surface>(&self, surface: &mut S, frame: u32) {
        let t = self.time(frame);
        let center = self.center();
        let outer = self.params.outer_rotation(t);

        surface.clear(self.palette.background);

        if self.palette.rare {
            draw_speckle(
                surface,
                self.palette.background,
                SPECKLE_COUNT,
                self.item.frame_seed(frame),
            );
            let v = self.item.variation;
            let shade = self
                .palette
                .background
                .darken((18 + 2 * v).min(255) as u8);
            draw_watermark(
                surface,
                Point2::new(center.x, center.y + WATERMARK_DROP),
                f64::from(85 + 2 * v),
                shade,
            );
        }

        render_cube(
            surface,
            f64::from(self.params.outer_extent),
            outer,
            center,
            &self.palette.faces,
        );
        render_cube(
            surface,
            self.params.inner_extent,
            self.params.inner_rotation(outer),
            center,
            &self.palette.inner,
        );
    }

    /// Both glow rings on a black surface, blurred.
    pub fn paint_glow<S: Surface>(&self, glow: &mut S, frame: u32) {
        let (r1, r2) = self.params.ring_radii(self.time(frame));
        let center = self.center();
        glow.clear(Color::BLACK);
        glow.stroke_ellipse(Bounds::circle(center, f64::from(r1)), self.palette.rings[0], 1);
        glow.stroke_ellipse(Bounds::circle(center, f64::from(r2)), self.palette.rings[1], 1);
        glow.blur(GLOW_BLUR_RADIUS);
    }

    /// Renders one finished frame.
    pub fn compose_frame(&self, frame: u32) -> Result<RgbImage, RenderError> {
        let size = self.config.canvas_size;

        let mut canvas = RgbSurface::new(size, size, self.palette.background);
        self.paint_scene(&mut canvas, frame);

        let mut glow = RgbSurface::new(size, size, Color::BLACK);
        self.paint_glow(&mut glow, frame);

        canvas.additive_blend(&glow, GLOW_BLEND_SCALE, 0.0)?;
        Ok(canvas.into_image())
    }

    /// Renders every frame in order.
    pub fn compose_all(&self) -> Result<Vec<RgbImage>, RenderError> {
        let frames = (0..self.config.frame_count)
            .map(|f| self.compose_frame(f))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(
            "Composed {} frames for #{} ({} v{})",
            frames.len(),
            self.item.index,
            self.trait_name,
            self.item.variation
        );
        Ok(frames)
    }
}
