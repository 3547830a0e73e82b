//! Error types for the drawing and encoding layer.

use thiserror::Error;

/// Errors that can occur while composing or encoding images.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Writing an encoded image failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    
    /// The image encoder rejected a frame
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    
    /// An animation was requested with no frames
    #[error("Animation has no frames")]
    EmptyAnimation,
    
    /// Two images that must share a size do not
    #[error("Size mismatch: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

impl CanvasError {
    /// Creates a size mismatch error.
    pub fn mismatch(expected: (u32, u32), actual: (u32, u32)) -> Self {
        Self::DimensionMismatch { expected, actual }
    }
}
