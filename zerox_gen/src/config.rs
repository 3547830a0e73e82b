//! Generator configuration: render constants plus where output goes.

use crate::GenError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use zerox_core::RenderConfig;

/// Configuration for a generator run.
///
/// Render fields are flattened, so a config file reads as
/// `{"frame_count": 20, "canvas_size": 400, "frame_duration_ms": 85, "output_dir": "./assets"}`.
/// Every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    /// Render constants and the trait table
    #[serde(flatten)]
    pub render: RenderConfig,

    /// Directory receiving every artifact (created if absent)
    pub output_dir: PathBuf,

    /// Write `manifest.json` next to the images
    pub write_manifest: bool,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            output_dir: PathBuf::from("./assets"),
            write_manifest: true,
        }
    }
}

impl GenConfig {
    /// Loads a JSON config file.
    pub fn load(path: &Path) -> Result<Self, GenError> {
        let text = std::fs::read_to_string(path).map_err(|source| GenError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| GenError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses a JSON config string.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Overrides the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config = GenConfig::from_json("{}").unwrap();
        assert_eq!(config, GenConfig::default());
        assert_eq!(config.render.frame_count, 20);
        assert_eq!(config.render.canvas_size, 400);
        assert_eq!(config.render.frame_duration_ms, 85);
        assert_eq!(config.render.traits.len(), 16);
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = GenConfig::from_json(
            r#"{"canvas_size": 200, "output_dir": "/tmp/out", "write_manifest": false}"#,
        )
        .unwrap();
        assert_eq!(config.render.canvas_size, 200);
        assert_eq!(config.render.frame_count, 20);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert!(!config.write_manifest);
    }

    #[test]
    fn test_custom_trait_table() {
        let config = GenConfig::from_json(
            r#"{"traits": [
                {"name": "ONLY", "params": {"hue": 90.0, "saturation": 40.0}},
                {"name": "GHOST"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(config.render.catalog_size(), 16);
        assert!(!config.render.traits[0].is_rare());
        assert!(config.render.traits[1].is_rare());
    }

    #[test]
    fn test_load_missing_file() {
        let err = GenConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, GenError::ConfigRead { .. }));
    }

    #[test]
    fn test_load_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(GenConfig::load(&path), Err(GenError::ConfigParse { .. })));
    }

    #[test]
    fn test_serialize_roundtrip() {
        let config = GenConfig::default().with_output_dir("out");
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(GenConfig::from_json(&json).unwrap(), config);
    }
}
