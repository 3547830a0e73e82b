//! Catalog indexing and the seeds derived from it.

use serde::{Deserialize, Serialize};

/// One entry of the catalog.
///
/// `index = trait_index * variations_per_trait + variation`. Items are
/// computed on demand; only their rendered output persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Global catalog index
    pub index: u32,

    /// Position in the trait table
    pub trait_index: u32,

    /// Sub-variant within the trait
    pub variation: u32,
}

impl CatalogItem {
    /// Creates an item from its (trait, variation) pair.
    pub fn new(trait_index: u32, variation: u32, variations_per_trait: u32) -> Self {
        Self {
            index: trait_index * variations_per_trait + variation,
            trait_index,
            variation,
        }
    }

    /// Splits a global index back into its (trait, variation) pair.
    pub fn from_index(index: u32, variations_per_trait: u32) -> Self {
        Self {
            index,
            trait_index: index / variations_per_trait,
            variation: index % variations_per_trait,
        }
    }

    /// Seed for the per-item geometry parameters.
    ///
    /// `index * 7919 + variation * 31 + trait_index * 127`
    pub fn seed(&self) -> u64 {
        u64::from(self.index) * 7919 + u64::from(self.variation) * 31 + u64::from(self.trait_index) * 127
    }

    /// Seed for the background speckle of one frame.
    pub fn frame_seed(&self, frame: u32) -> u64 {
        u64::from(frame) * 100 + u64::from(self.index)
    }
}
