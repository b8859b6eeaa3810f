use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use crate::utils::{EnhancerError, EnhancerResult};
use crate::utils::formats::{OUTPUT_EXTENSION, OUTPUT_SUFFIX};

/// Lists the regular files directly inside `dir`, sorted by file name.
///
/// Symlinks are followed, so a link to a file is kept and a link to a
/// directory is dropped. Entries whose metadata cannot be read (dangling
/// links) are skipped.
pub async fn list_entries(dir: impl AsRef<Path>) -> EnhancerResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut read_dir = fs::read_dir(dir).await.map_err(|e| {
        EnhancerError::enumeration(format!("Cannot list '{}': {e}", dir.display()))
    })?;

    let mut entries = Vec::new();
    while let Some(entry) = read_dir.next_entry().await.map_err(|e| {
        EnhancerError::enumeration(format!("Cannot list '{}': {e}", dir.display()))
    })? {
        let path = entry.path();
        match fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => entries.push(path),
            Ok(_) => debug!("Skipping non-file entry: {}", path.display()),
            Err(e) => debug!("Skipping unreadable entry {}: {e}", path.display()),
        }
    }

    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}

/// Derives `<dir>/<stem>_enhanced.jpg` from `<dir>/<stem>.<ext>`.
pub fn derive_output_path(original: impl AsRef<Path>) -> PathBuf {
    let original = original.as_ref();
    let mut name: OsString = original.file_stem().unwrap_or_default().to_os_string();
    name.push(OUTPUT_SUFFIX);
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    original.with_file_name(name)
}

/// Deletes the original file once its replacement is on disk.
pub fn remove_original(path: impl AsRef<Path>) -> EnhancerResult<()> {
    let path = path.as_ref();
    std::fs::remove_file(path).map_err(|e| {
        EnhancerError::remove(format!("Cannot delete original '{}': {e}", path.display()))
    })
}

/// Get the file name of a path for display, falling back to the full path
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
