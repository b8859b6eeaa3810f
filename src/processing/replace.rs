// src/processing/replace.rs

//! Write-then-delete swap of an original file for its enhanced output.

use std::path::{Path, PathBuf};

use image::RgbImage;
use tracing::{debug, warn};

use crate::core::ItemOutcome;
use crate::utils::{derive_output_path, remove_original, EnhancerResult};

use super::codec::encode;

/// Writes `buffer` to `<stem>_enhanced.jpg` next to `original_path`, then
/// deletes the original.
///
/// The order is fixed: the original is only deleted after the output has been
/// written and synced. A failed encode leaves the original untouched. A failed
/// delete is reported as `Remove` with the output already in place.
///
/// An existing file at the output path is overwritten.
pub fn replace(original_path: &Path, buffer: &RgbImage) -> ItemOutcome {
    try_replace(original_path, buffer).into()
}

fn try_replace(original_path: &Path, buffer: &RgbImage) -> EnhancerResult<PathBuf> {
    let output_path = derive_output_path(original_path);

    if output_path.exists() {
        warn!("Overwriting existing file: {}", output_path.display());
    }

    encode(buffer, &output_path)?;
    debug!("Wrote '{}'", output_path.display());

    remove_original(original_path)?;
    debug!("Deleted original '{}'", original_path.display());

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::EnhancerError;
    use image::Rgb;

    fn buffer() -> RgbImage {
        RgbImage::from_pixel(4, 2, Rgb([30, 60, 90]))
    }

    #[test]
    fn writes_output_then_deletes_original() {
        let dir = tempfile::tempdir().unwrap();
        let original = dir.path().join("photo.png");
        std::fs::write(&original, b"original bytes").unwrap();

        let outcome = replace(&original, &buffer());

        let output = dir.path().join("photo_enhanced.jpg");
        assert_eq!(outcome, ItemOutcome::Succeeded { output_path: output.clone() });
        assert!(!original.exists());
        assert!(output.is_file());
    }

    #[test]
    fn failed_encode_keeps_original() {
        let dir = tempfile::tempdir().unwrap();
        let original = dir.path().join("photo.png");
        std::fs::write(&original, b"original bytes").unwrap();
        // A directory squatting on the output name makes the create fail
        std::fs::create_dir(dir.path().join("photo_enhanced.jpg")).unwrap();

        let outcome = replace(&original, &buffer());

        assert!(matches!(outcome, ItemOutcome::Failed { error: EnhancerError::Encode(_) }));
        assert_eq!(std::fs::read(&original).unwrap(), b"original bytes");
        assert!(dir.path().join("photo_enhanced.jpg").is_dir());
    }

    #[test]
    fn existing_output_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let original = dir.path().join("photo.png");
        std::fs::write(&original, b"original bytes").unwrap();
        let output = dir.path().join("photo_enhanced.jpg");
        std::fs::write(&output, b"unrelated").unwrap();

        assert!(replace(&original, &buffer()).is_success());
        assert_ne!(std::fs::read(&output).unwrap(), b"unrelated");
    }

    #[test]
    fn missing_original_after_encode_is_remove_error() {
        let dir = tempfile::tempdir().unwrap();
        let original = dir.path().join("ghost.png");

        let outcome = replace(&original, &buffer());

        assert!(matches!(outcome, ItemOutcome::Failed { error: EnhancerError::Remove(_) }));
        // Output stays on disk
        assert!(dir.path().join("ghost_enhanced.jpg").is_file());
    }
}
