//! Error types for the rendering pipeline.

use thiserror::Error;
use zerox_canvas::CanvasError;

/// Errors that can occur while rendering catalog items.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Requested catalog index lies outside the configured catalog
    #[error("Catalog index {index} out of range (catalog holds {size} items)")]
    IndexOutOfRange { index: u32, size: u32 },
    
    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    
    /// Drawing or encoding failed
    #[error("Canvas error: {0}")]
    Canvas(#[from] CanvasError),
}

impl RenderError {
    /// Creates a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
