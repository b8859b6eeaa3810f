// src/processing/codec.rs

//! Decode/encode between files on disk and the 8-bit RGB buffers the
//! transform works on.
//!
//! Whatever the source layout (gray, RGBA, 16-bit), decoding normalises to
//! three 8-bit channels in RGB order, so no channel-order conversions leak
//! past this module.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{ImageError, ImageReader, ImageResult, RgbImage};
use tracing::{debug, warn};

use crate::utils::{EnhancerError, EnhancerResult, JPEG_QUALITY};

/// Decodes the image at `path` into an RGB buffer.
///
/// The format is sniffed from the file contents, not the extension. Missing,
/// unreadable, empty or non-image files all fail with `Decode`.
pub fn decode(path: &Path) -> EnhancerResult<RgbImage> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| EnhancerError::decode(format!("Cannot read '{}': {e}", path.display())))?;

    let format = reader.format();
    let image = reader
        .decode()
        .map_err(|e| EnhancerError::decode(format!("Failed to load '{}': {e}", path.display())))?;

    if image.width() == 0 || image.height() == 0 {
        return Err(EnhancerError::decode(format!("'{}' has no pixels", path.display())));
    }

    debug!(
        "Decoded '{}' ({:?}, {:?}): {}×{}",
        path.display(),
        format,
        image.color(),
        image.width(),
        image.height()
    );

    Ok(image.to_rgb8())
}

/// Encodes `buffer` as JPEG at `path`, creating or truncating the file.
///
/// If writing fails after the file was created, the partial file is removed
/// before returning `Encode`.
pub fn encode(buffer: &RgbImage, path: &Path) -> EnhancerResult<()> {
    let file = File::create(path)
        .map_err(|e| EnhancerError::encode(format!("Cannot create '{}': {e}", path.display())))?;

    if let Err(e) = write_jpeg(buffer, file) {
        if let Err(cleanup) = std::fs::remove_file(path) {
            warn!("Could not remove partial output '{}': {cleanup}", path.display());
        }
        return Err(EnhancerError::encode(format!("JPEG save to '{}' failed: {e}", path.display())));
    }

    Ok(())
}

fn write_jpeg(buffer: &RgbImage, file: File) -> ImageResult<()> {
    let mut writer = BufWriter::new(file);
    JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY).encode_image(buffer)?;

    // Flush and sync so the output is on disk before anyone deletes the original.
    let file = writer
        .into_inner()
        .map_err(|e| ImageError::IoError(e.into_error()))?;
    file.sync_all()?;
    Ok(())
}
