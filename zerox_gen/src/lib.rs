//! ZEROX33 Catalog Generator
//!
//! Drives the rendering pipeline in `zerox_core` over the whole catalog and
//! persists the results:
//!
//! ```text
//! for trait in 0..16:                   output_dir/
//!   for variation in 0..8:                0.gif ... 127.gif
//!     FrameComposer -> Animation  ───►    logo.png
//!     Animation::write_to(slot)           manifest.json
//! ```
//!
//! Items share no state, so output is independent of generation order.
//!
//! # Usage
//!
//! ```ignore
//! use zerox_gen::{CatalogDriver, GenConfig};
//!
//! let config = GenConfig::default().with_output_dir("./assets");
//! let summary = CatalogDriver::new(config)?.run()?;
//! println!("{} items, {} bytes", summary.items, summary.total_bytes);
//! ```

mod config;
mod driver;
mod error;
mod exporter;
mod progress;

pub use config::GenConfig;
pub use driver::{trait_map, CatalogDriver, CatalogSummary, ItemReport, TraitRange};
pub use error::GenError;
pub use exporter::{CatalogManifest, ManifestEntry, PaletteHex, MANIFEST_FILE};
pub use progress::Progress;
