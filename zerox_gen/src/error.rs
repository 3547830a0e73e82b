//! Error types for the catalog driver.

use std::path::PathBuf;
use thiserror::Error;
use zerox_canvas::CanvasError;
use zerox_core::RenderError;

/// Errors that can occur while generating the catalog.
#[derive(Debug, Error)]
pub enum GenError {
    /// Output directory could not be created or written to
    #[error("Output directory {path:?} unusable: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    
    /// Config file could not be read
    #[error("Failed to read config {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    
    /// Config file is not valid JSON for `GenConfig`
    #[error("Failed to parse config {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    
    /// Rendering or encoding an item failed
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
    
    /// Encoding the logo failed
    #[error("Canvas error: {0}")]
    Canvas(#[from] CanvasError),
    
    /// Other I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GenError {
    /// Creates an output directory error.
    pub fn output_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputDir {
            path: path.into(),
            source,
        }
    }
}
