//! Catalog driver - renders every (trait, variation) pair and the logo.

use crate::config::GenConfig;
use crate::exporter::{CatalogManifest, ManifestEntry, MANIFEST_FILE};
use crate::progress::Progress;
use crate::GenError;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};
use zerox_canvas::write_png;
use zerox_core::{render_logo, Animation, FrameComposer, OutputSlot, RenderConfig};

/// Probe file used to confirm the output directory is writable.
const PROBE_FILE: &str = ".zerox-write-probe";

/// Result of rendering one catalog item.
#[derive(Debug, Clone)]
pub struct ItemReport {
    pub entry: ManifestEntry,
    pub slot: OutputSlot,
    pub frame_count: usize,
}

/// Results of a full catalog run.
#[derive(Debug, Clone)]
pub struct CatalogSummary {
    /// Items written
    pub items: usize,

    /// Bytes written across items, logo and manifest
    pub total_bytes: u64,

    /// Wall time of the run
    pub elapsed: Duration,

    pub logo_path: Option<PathBuf>,
    pub manifest_path: Option<PathBuf>,
}

/// One line of the trait map: which index range a trait occupies.
#[derive(Debug, Clone, PartialEq)]
pub struct TraitRange {
    pub name: String,
    pub first: u32,
    pub last: u32,
    pub rare: bool,
}

/// Index ranges of every trait, in catalog order.
pub fn trait_map(config: &RenderConfig) -> Vec<TraitRange> {
    let per = config.variations_per_trait;
    config
        .traits
        .iter()
        .enumerate()
        .map(|(t, def)| TraitRange {
            name: def.name.clone(),
            first: t as u32 * per,
            last: t as u32 * per + per - 1,
            rare: def.is_rare(),
        })
        .collect()
}

/// Drives catalog generation into one output directory.
pub struct CatalogDriver {
    config: GenConfig,
    include_logo: bool,
}

impl CatalogDriver {
    /// Creates a driver after validating the configuration.
    pub fn new(config: GenConfig) -> Result<Self, GenError> {
        config.render.validate()?;
        Ok(Self {
            config,
            include_logo: true,
        })
    }

    /// Sets whether the logo is rendered.
    pub fn with_logo(mut self, include: bool) -> Self {
        self.include_logo = include;
        self
    }

    pub fn config(&self) -> &GenConfig {
        &self.config
    }

    pub fn output_dir(&self) -> &Path {
        &self.config.output_dir
    }

    /// Creates the output directory and proves it is writable.
    ///
    /// Runs before any rendering so a bad directory fails fast.
    pub fn prepare_output(&self) -> Result<(), GenError> {
        let dir = self.output_dir();
        fs::create_dir_all(dir).map_err(|e| GenError::output_dir(dir, e))?;
        let probe = dir.join(PROBE_FILE);
        fs::write(&probe, b"").map_err(|e| GenError::output_dir(dir, e))?;
        fs::remove_file(&probe).map_err(|e| GenError::output_dir(dir, e))?;
        Ok(())
    }

    /// Renders and writes one catalog item.
    pub fn render_item(&self, index: u32) -> Result<ItemReport, GenError> {
        let render = &self.config.render;
        let item = render.item(index)?;
        let composer = FrameComposer::new(render, item)?;
        let animation = Animation::assemble(composer.compose_all()?, render.frame_duration_ms)?;

        let slot = OutputSlot::Item(index);
        let bytes = animation.write_to(&slot.path_in(self.output_dir()))?;

        let entry = ManifestEntry::new(
            item,
            slot.file_name(),
            composer.trait_name(),
            composer.palette(),
            *composer.params(),
            bytes,
        );
        Ok(ItemReport {
            entry,
            slot,
            frame_count: animation.frame_count(),
        })
    }

    /// Renders and writes the logo; returns its path and size.
    pub fn write_logo(&self) -> Result<(PathBuf, u64), GenError> {
        let path = OutputSlot::Logo.path_in(self.output_dir());
        let bytes = write_png(&render_logo(), &path)?;
        Ok((path, bytes))
    }

    /// Renders the whole catalog, then the logo and manifest.
    ///
    /// Stops at the first failing item: a partial set is not a usable set.
    pub fn run(&self) -> Result<CatalogSummary, GenError> {
        self.prepare_output()?;

        let render = &self.config.render;
        let mut progress = Progress::new(render.catalog_size());
        let mut manifest = CatalogManifest::new(render);

        for item in render.items() {
            let report = self.render_item(item.index)?;
            progress.advance();

            let tag = if report.entry.rare { " ★ RARE" } else { "" };
            info!(
                "[{}] {:>3}/{}  {} v{}{}  ETA:{}s",
                progress.bar(),
                progress.done(),
                progress.total(),
                report.entry.trait_name,
                report.entry.variation,
                tag,
                progress.eta().as_secs()
            );
            debug!("  {} ({} bytes)", report.slot, report.entry.bytes);

            manifest.add_item(report.entry);
        }

        let mut total_bytes = manifest.item_bytes();

        let logo_path = if self.include_logo {
            let (path, bytes) = self.write_logo()?;
            total_bytes += bytes;
            manifest.logo = Some(OutputSlot::Logo.file_name());
            Some(path)
        } else {
            None
        };

        let manifest_path = if self.config.write_manifest {
            let path = self.output_dir().join(MANIFEST_FILE);
            manifest.write_to_file(&path)?;
            total_bytes += fs::metadata(&path)?.len();
            Some(path)
        } else {
            None
        };

        Ok(CatalogSummary {
            items: manifest.items.len(),
            total_bytes,
            elapsed: progress.elapsed(),
            logo_path,
            manifest_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn tiny_config(dir: &Path) -> GenConfig {
        let mut config = GenConfig::default().with_output_dir(dir);
        config.render.canvas_size = 32;
        config.render.frame_count = 2;
        config
    }

    #[test]
    fn test_trait_map_ranges() {
        let map = trait_map(&RenderConfig::default());
        assert_eq!(map.len(), 16);
        assert_eq!((map[0].first, map[0].last), (0, 7));
        assert_eq!((map[15].first, map[15].last), (120, 127));
        assert!(map[14].rare && map[15].rare);
        assert!(!map[13].rare);
    }

    #[test]
    fn test_invalid_config_rejected_up_front() {
        let mut config = GenConfig::default();
        config.render.frame_count = 0;
        assert!(matches!(CatalogDriver::new(config), Err(GenError::Render(_))));
    }

    #[test]
    fn test_bad_trait_params_rejected_before_output() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("out");
        let mut config = GenConfig::from_json(
            r#"{"traits": [{"name": "BAD", "params": {"hue": 90.0, "saturation": -300.0}}]}"#,
        )
        .unwrap()
        .with_output_dir(&dir);
        config.render.canvas_size = 32;

        assert!(matches!(CatalogDriver::new(config), Err(GenError::Render(_))));
        assert!(!dir.exists());
    }

    #[test]
    fn test_prepare_output_creates_nested_dir() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("a").join("b");
        let driver = CatalogDriver::new(tiny_config(&dir)).unwrap();
        driver.prepare_output().unwrap();
        assert!(dir.is_dir());
        assert!(!dir.join(PROBE_FILE).exists());
    }

    #[test]
    fn test_prepare_output_fails_on_file_path() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("not-a-dir");
        fs::write(&blocker, b"x").unwrap();
        let driver = CatalogDriver::new(tiny_config(&blocker)).unwrap();
        assert!(matches!(driver.prepare_output(), Err(GenError::OutputDir { .. })));
    }

    #[test]
    fn test_render_item_writes_slot() {
        let root = tempfile::tempdir().unwrap();
        let driver = CatalogDriver::new(tiny_config(root.path())).unwrap();
        driver.prepare_output().unwrap();

        let report = driver.render_item(113).unwrap();
        assert_eq!(report.slot, OutputSlot::Item(113));
        assert_eq!(report.frame_count, 2);
        assert_eq!(report.entry.trait_name, "Z-RARE-I");
        assert!(root.path().join("113.gif").is_file());
    }

    #[test]
    fn test_full_run_produces_complete_catalog() {
        let root = tempfile::tempdir().unwrap();
        let driver = CatalogDriver::new(tiny_config(root.path())).unwrap();
        let summary = driver.run().unwrap();

        assert_eq!(summary.items, 128);
        assert!(summary.total_bytes > 0);

        let names: HashSet<String> = fs::read_dir(root.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        for i in 0..128 {
            assert!(names.contains(&format!("{}.gif", i)), "missing {}.gif", i);
        }
        assert!(names.contains("logo.png"));
        assert!(names.contains(MANIFEST_FILE));
        assert_eq!(names.len(), 130);

        let manifest: CatalogManifest = serde_json::from_str(
            &fs::read_to_string(summary.manifest_path.unwrap()).unwrap(),
        )
        .unwrap();
        for (i, entry) in manifest.items.iter().enumerate() {
            assert_eq!(entry.index, i as u32);
            assert_eq!(entry.trait_index, entry.index / 8);
            assert_eq!(entry.variation, entry.index % 8);
        }
    }

    #[test]
    fn test_manifest_write_failure_surfaces_as_io() {
        let root = tempfile::tempdir().unwrap();
        let manifest = CatalogManifest::new(&RenderConfig::default());
        let missing = root.path().join("gone").join(MANIFEST_FILE);
        let err: GenError = manifest.write_to_file(&missing).unwrap_err().into();
        assert!(matches!(err, GenError::Io(_)));
    }

    #[test]
    fn test_run_without_logo_or_manifest() {
        let root = tempfile::tempdir().unwrap();
        let mut config = tiny_config(root.path());
        config.write_manifest = false;
        config.render.traits.truncate(1);
        let summary = CatalogDriver::new(config).unwrap().with_logo(false).run().unwrap();

        assert_eq!(summary.items, 8);
        assert!(summary.logo_path.is_none());
        assert!(summary.manifest_path.is_none());
        assert!(!root.path().join("logo.png").exists());
    }
}
