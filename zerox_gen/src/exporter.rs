//! JSON manifest describing every generated artifact.
//!
//! One entry per catalog item with its trait, palette and animation
//! parameters, so the set can be indexed without decoding a single GIF.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use zerox_core::{CatalogItem, ItemParams, Palette, RenderConfig};

/// Manifest file name inside the output directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Palette in `#rrggbb` form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteHex {
    pub faces: Vec<String>,
    pub inner: Vec<String>,
    pub background: String,
    pub glow: String,
}

impl From<&Palette> for PaletteHex {
    fn from(p: &Palette) -> Self {
        Self {
            faces: p.faces.iter().map(|c| c.to_hex()).collect(),
            inner: p.inner.iter().map(|c| c.to_hex()).collect(),
            background: p.background.to_hex(),
            glow: p.glow.to_hex(),
        }
    }
}

/// One catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub index: u32,
    pub file: String,
    pub trait_name: String,
    pub trait_index: u32,
    pub variation: u32,
    pub rare: bool,
    pub palette: PaletteHex,
    pub params: ItemParams,
    pub bytes: u64,
}

impl ManifestEntry {
    pub fn new(
        item: CatalogItem,
        file: String,
        trait_name: &str,
        palette: &Palette,
        params: ItemParams,
        bytes: u64,
    ) -> Self {
        Self {
            index: item.index,
            file,
            trait_name: trait_name.to_string(),
            trait_index: item.trait_index,
            variation: item.variation,
            rare: palette.rare,
            palette: palette.into(),
            params,
            bytes,
        }
    }
}

/// Complete catalog manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogManifest {
    pub frame_count: u32,
    pub frame_duration_ms: u32,
    pub canvas_size: u32,

    /// Logo file, if one was written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    pub items: Vec<ManifestEntry>,
}

impl CatalogManifest {
    /// Creates an empty manifest for a configuration.
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            frame_count: config.frame_count,
            frame_duration_ms: config.frame_duration_ms,
            canvas_size: config.canvas_size,
            logo: None,
            items: Vec::new(),
        }
    }

    /// Adds an item.
    pub fn add_item(&mut self, entry: ManifestEntry) {
        self.items.push(entry);
    }

    /// Total bytes of every item recorded.
    pub fn item_bytes(&self) -> u64 {
        self.items.iter().map(|e| e.bytes).sum()
    }

    /// Writes to a JSON file.
    pub fn write_to_file(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
