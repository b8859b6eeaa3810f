use std::path::Path;
use crate::utils::{EnhancerError, EnhancerResult};

/// Validates the directory path handed over by the front end.
///
/// Only an empty path is rejected here. Whether the directory exists is left
/// to enumeration, which reports it as an `Enumeration` error.
pub fn validate_directory_path(path: &str) -> EnhancerResult<&Path> {
    if path.is_empty() {
        return Err(EnhancerError::config("Please select a folder."));
    }

    Ok(Path::new(path))
}
