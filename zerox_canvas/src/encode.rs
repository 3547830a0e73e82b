//! Encoders for finished frames: looping GIF animations and static PNGs.

use crate::CanvasError;
use image::codecs::gif::{GifEncoder, Repeat};
use image::buffer::ConvertBuffer;
use image::{Delay, Frame, RgbImage, RgbaImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Color quantization speed handed to the GIF encoder (1 = best, 30 = fastest).
const GIF_SPEED: i32 = 10;

/// Encodes `frames` as an infinitely looping GIF into `writer`.
///
/// Frame order is preserved exactly and every frame gets the same delay.
pub fn encode_looping_animation<W: Write>(
    frames: &[RgbImage],
    delay_ms: u32,
    writer: W,
) -> Result<(), CanvasError> {
    let first = frames.first().ok_or(CanvasError::EmptyAnimation)?;
    let expected = first.dimensions();
    if let Some(bad) = frames.iter().find(|f| f.dimensions() != expected) {
        return Err(CanvasError::mismatch(expected, bad.dimensions()));
    }

    let mut encoder = GifEncoder::new_with_speed(writer, GIF_SPEED);
    encoder.set_repeat(Repeat::Infinite)?;

    let delay = Delay::from_numer_denom_ms(delay_ms, 1);
    for frame in frames {
        let rgba: RgbaImage = frame.convert();
        encoder.encode_frame(Frame::from_parts(rgba, 0, 0, delay))?;
    }
    Ok(())
}

/// Writes a looping GIF to `path` and returns the number of bytes written.
pub fn write_looping_animation(
    frames: &[RgbImage],
    delay_ms: u32,
    path: &Path,
) -> Result<u64, CanvasError> {
    let mut writer = BufWriter::new(File::create(path)?);
    encode_looping_animation(frames, delay_ms, &mut writer)?;
    writer.flush()?;
    let bytes = std::fs::metadata(path)?.len();
    debug!("Wrote {} frames ({} bytes) to {}", frames.len(), bytes, path.display());
    Ok(bytes)
}

/// Writes a static RGBA image as PNG and returns the number of bytes written.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<u64, CanvasError> {
    image.save_with_format(path, image::ImageFormat::Png)?;
    Ok(std::fs::metadata(path)?.len())
}
