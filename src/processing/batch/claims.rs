use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::utils::{EnhancerError, EnhancerResult};

/// Paths a batch must not write over.
///
/// Starts with every scanned entry. An original is released once its item
/// has deleted it; every output written during the run is held from then on.
#[derive(Debug, Default)]
pub struct PathClaims {
    held: HashSet<PathBuf>,
}

impl PathClaims {
    pub fn new<'a>(entries: impl IntoIterator<Item = &'a PathBuf>) -> Self {
        Self {
            held: entries.into_iter().cloned().collect(),
        }
    }

    /// Fails with `Encode` when `output` is an entry still on disk or an
    /// output already written by this run.
    pub fn check_output(&self, output: &Path) -> EnhancerResult<()> {
        if self.held.contains(output) {
            return Err(EnhancerError::encode(format!(
                "Output path '{}' collides with a file in this batch",
                output.display()
            )));
        }
        Ok(())
    }

    /// The original was deleted; its path no longer needs protecting.
    pub fn release(&mut self, original: &Path) {
        self.held.remove(original);
    }

    pub fn hold(&mut self, output: PathBuf) {
        self.held.insert(output);
    }
}
