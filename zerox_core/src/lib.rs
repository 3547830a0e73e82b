//! ZEROX33 Core - Procedural Rotating-Cube Animations
//!
//! This library renders the 128-piece ZEROX33 catalog: each piece is a short
//! looping animation of two nested, counter-rotating cubes with a pulsing glow.
//!
//! Data flows one way:
//! 1. **Color Model**: (trait, variation) → palette
//! 2. **Geometry Engine**: cube vertices → rotation → perspective projection
//! 3. **Face Renderer**: painter's-algorithm face sorting and shading
//! 4. **Frame Composer**: background, texture, cubes and glow per frame
//! 5. **Animation Assembler**: frames → one looping artifact
//!
//! Every output is a pure function of the configuration and the catalog
//! index; all randomness comes from explicitly seeded generators.

pub mod animation;
pub mod catalog;
pub mod color;
pub mod config;
pub mod frame;
pub mod geometry;
pub mod logo;
pub mod renderer;
pub mod traits;

mod error;

#[cfg(test)]
mod testing;

// Re-export key types for convenience
pub use animation::{Animation, OutputSlot};
pub use catalog::CatalogItem;
pub use color::{hsl_to_rgb, Palette};
pub use config::RenderConfig;
pub use error::RenderError;
pub use frame::{FrameComposer, ItemParams};
pub use logo::render_logo;
pub use traits::{default_traits, TraitDef, TraitParams};

/// Renders catalog item `index` into a finished animation.
pub fn render_item(config: &RenderConfig, index: u32) -> Result<Animation, RenderError> {
    let item = config.item(index)?;
    let composer = FrameComposer::new(config, item)?;
    let frames = composer.compose_all()?;
    Animation::assemble(frames, config.frame_duration_ms)
}
