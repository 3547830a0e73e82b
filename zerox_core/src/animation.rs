//! The animation assembler: ordered frames to one looping file.

use crate::RenderError;
use std::fmt;
use std::path::{Path, PathBuf};
use zerox_canvas::{write_looping_animation, CanvasError, RgbImage};

/// Where a generated artifact lands inside the output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputSlot {
    /// Animated catalog item, `<index>.gif`
    Item(u32),

    /// Static logo, `logo.png`
    Logo,
}

impl OutputSlot {
    pub fn file_name(&self) -> String {
        match self {
            OutputSlot::Item(index) => format!("{}.gif", index),
            OutputSlot::Logo => "logo.png".to_string(),
        }
    }

    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

impl fmt::Display for OutputSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

/// An ordered, infinitely looping frame sequence with a fixed frame duration.
#[derive(Debug, Clone)]
pub struct Animation {
    frames: Vec<RgbImage>,
    frame_duration_ms: u32,
}

impl Animation {
    /// Packages frames in the order given.
    ///
    /// Fails on an empty sequence or frames of differing size.
    pub fn assemble(frames: Vec<RgbImage>, frame_duration_ms: u32) -> Result<Self, RenderError> {
        let first = frames.first().ok_or(CanvasError::EmptyAnimation)?;
        let expected = first.dimensions();
        if let Some(bad) = frames.iter().find(|f| f.dimensions() != expected) {
            return Err(CanvasError::mismatch(expected, bad.dimensions()).into());
        }
        Ok(Self {
            frames,
            frame_duration_ms,
        })
    }

    pub fn frames(&self) -> &[RgbImage] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame_duration_ms(&self) -> u32 {
        self.frame_duration_ms
    }

    /// Every assembled animation repeats forever.
    pub fn loops_forever(&self) -> bool {
        true
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.frames[0].dimensions()
    }

    /// Encodes to `path` and returns the bytes written.
    pub fn write_to(&self, path: &Path) -> Result<u64, RenderError> {
        Ok(write_looping_animation(&self.frames, self.frame_duration_ms, path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zerox_canvas::Rgb;

    fn frame(v: u8) -> RgbImage {
        RgbImage::from_pixel(8, 8, Rgb([v, v, v]))
    }

    #[test]
    fn test_assemble_keeps_order() {
        let anim = Animation::assemble(vec![frame(1), frame(2), frame(3)], 85).unwrap();
        let firsts: Vec<u8> = anim.frames().iter().map(|f| f.get_pixel(0, 0).0[0]).collect();
        assert_eq!(firsts, vec![1, 2, 3]);
        assert_eq!(anim.frame_duration_ms(), 85);
        assert!(anim.loops_forever());
    }

    #[test]
    fn test_assemble_rejects_empty() {
        assert!(matches!(
            Animation::assemble(Vec::new(), 85),
            Err(RenderError::Canvas(CanvasError::EmptyAnimation))
        ));
    }

    #[test]
    fn test_assemble_rejects_mixed_sizes() {
        let odd = RgbImage::new(4, 4);
        assert!(Animation::assemble(vec![frame(1), odd], 85).is_err());
    }

    #[test]
    fn test_slot_names() {
        assert_eq!(OutputSlot::Item(0).file_name(), "0.gif");
        assert_eq!(OutputSlot::Item(127).file_name(), "127.gif");
        assert_eq!(OutputSlot::Logo.file_name(), "logo.png");
        assert_eq!(
            OutputSlot::Item(5).path_in(Path::new("assets")),
            PathBuf::from("assets/5.gif")
        );
    }
}
