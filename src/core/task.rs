//! Image task definition and creation.

use std::path::PathBuf;
use crate::utils::{derive_output_path, extract_filename};

/// One directory entry queued for decode, transform and replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhanceTask {
    /// Path to the original file
    pub input_path: PathBuf,
    /// File name shown to the front end
    pub file_name: String,
}

impl EnhanceTask {
    pub fn new(input_path: PathBuf) -> Self {
        let file_name = extract_filename(&input_path);
        Self {
            input_path,
            file_name,
        }
    }

    /// Where the enhanced JPEG will be written.
    pub fn output_path(&self) -> PathBuf {
        derive_output_path(&self.input_path)
    }
}
