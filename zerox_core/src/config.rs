//! Render configuration: the constants every catalog item shares.

use crate::catalog::CatalogItem;
use crate::traits::{default_traits, TraitDef};
use crate::RenderError;
use serde::{Deserialize, Serialize};

/// Configuration for rendering the catalog.
///
/// Built once at startup and passed by reference; nothing in the pipeline
/// reads global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Frames per animation
    pub frame_count: u32,

    /// Width and height of every frame in pixels
    pub canvas_size: u32,

    /// Display time of each frame
    pub frame_duration_ms: u32,

    /// Variations rendered per trait
    pub variations_per_trait: u32,

    /// Trait table in catalog order
    pub traits: Vec<TraitDef>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            frame_count: 20,
            canvas_size: 400,
            frame_duration_ms: 85,
            variations_per_trait: 8,
            traits: default_traits(),
        }
    }
}

/// Smallest canvas the scene still fits on in any meaningful way.
pub const MIN_CANVAS_SIZE: u32 = 32;

impl RenderConfig {
    /// Checks the configuration for values that cannot produce a catalog.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.frame_count == 0 {
            return Err(RenderError::config("frame_count must be at least 1"));
        }
        if self.canvas_size < MIN_CANVAS_SIZE {
            return Err(RenderError::config(format!(
                "canvas_size must be at least {} (got {})",
                MIN_CANVAS_SIZE, self.canvas_size
            )));
        }
        if self.frame_duration_ms == 0 {
            return Err(RenderError::config("frame_duration_ms must be positive"));
        }
        if self.variations_per_trait == 0 {
            return Err(RenderError::config("variations_per_trait must be at least 1"));
        }
        if self.traits.is_empty() {
            return Err(RenderError::config("trait table is empty"));
        }
        for def in &self.traits {
            let Some(params) = def.params else { continue };
            if !(0.0..360.0).contains(&params.hue) {
                return Err(RenderError::config(format!(
                    "trait {}: hue {} outside [0, 360)",
                    def.name, params.hue
                )));
            }
            if !(0.0..=100.0).contains(&params.saturation) {
                return Err(RenderError::config(format!(
                    "trait {}: saturation {} outside [0, 100]",
                    def.name, params.saturation
                )));
            }
        }
        Ok(())
    }

    /// Total number of catalog items.
    pub fn catalog_size(&self) -> u32 {
        self.traits.len() as u32 * self.variations_per_trait
    }

    /// Resolves a global catalog index.
    pub fn item(&self, index: u32) -> Result<CatalogItem, RenderError> {
        let size = self.catalog_size();
        if index >= size {
            return Err(RenderError::IndexOutOfRange { index, size });
        }
        Ok(CatalogItem::from_index(index, self.variations_per_trait))
    }

    /// Returns the trait an item belongs to.
    pub fn trait_of(&self, item: &CatalogItem) -> Result<&TraitDef, RenderError> {
        self.traits
            .get(item.trait_index as usize)
            .ok_or(RenderError::IndexOutOfRange {
                index: item.index,
                size: self.catalog_size(),
            })
    }

    /// Iterates every item in catalog order: traits outer, variations inner.
    pub fn items(&self) -> impl Iterator<Item = CatalogItem> + '_ {
        let per_trait = self.variations_per_trait;
        (0..self.traits.len() as u32).flat_map(move |t| {
            (0..per_trait).map(move |v| CatalogItem::new(t, v, per_trait))
        })
    }
}
