use std::path::Path;

use tracing::{debug, info, warn};

use crate::core::{BatchObserver, BatchState, BatchSummary, EnhanceTask, ItemOutcome, ProgressCounter};
use crate::processing::executor::execute;
use crate::utils::{list_entries, validate_directory_path, EnhancerError, EnhancerResult};

use super::claims::PathClaims;

/// Runs one enhancement batch over the immediate files of a directory.
///
/// Items are processed strictly one after another in file-name order. A
/// failing item is reported and skipped; only an empty path or an unlistable
/// directory stops the batch, and both do so before any item starts.
///
/// An item whose output name matches a file still in the batch (a pending or
/// failed entry, or another item's output) fails before anything is written.
#[derive(Debug, Default)]
pub struct BatchProcessor {
    state: BatchState,
}

impl BatchProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> BatchState {
        self.state
    }

    /// Processes every regular file in `directory`, reporting to `observer`.
    ///
    /// Returns `Config`/`Enumeration` errors after reporting them; per-item
    /// failures only show up in the summary and through `on_item_error`.
    pub async fn run<O>(&mut self, directory: &str, observer: &mut O) -> EnhancerResult<BatchSummary>
    where
        O: BatchObserver + ?Sized,
    {
        let directory = match validate_directory_path(directory) {
            Ok(path) => path,
            Err(e) => {
                warn!("Batch not started: {}", e);
                observer.on_config_error(&e.to_string());
                return Err(e);
            }
        };

        self.state = BatchState::Scanning;
        let tasks = match self.scan(directory).await {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!("Batch aborted: {}", e);
                self.state = BatchState::Completed;
                observer.on_enumeration_error(&e.to_string());
                return Err(e);
            }
        };

        let total = tasks.len();
        info!("Processing batch of {} files in {}", total, directory.display());

        let mut claims = PathClaims::new(tasks.iter().map(|t| &t.input_path));
        let mut counter = ProgressCounter::new(total);
        let mut summary = BatchSummary::new(total);
        observer.on_batch_start(total);

        for (idx, task) in tasks.into_iter().enumerate() {
            self.state = BatchState::Processing { current: idx + 1, total };

            let target = task.output_path();
            let outcome = match claims.check_output(&target) {
                Ok(()) => execute(&task).await,
                Err(error) => ItemOutcome::Failed { error },
            };
            summary.record(&outcome);
            match &outcome {
                ItemOutcome::Succeeded { output_path } => {
                    debug!("{} → {}", task.file_name, output_path.display());
                    claims.release(&task.input_path);
                    claims.hold(output_path.clone());
                    observer.on_item_complete(&task.file_name, output_path);
                }
                ItemOutcome::Failed { error } => {
                    // Output is on disk even though the original survived.
                    if matches!(error, EnhancerError::Remove(_)) {
                        claims.hold(target);
                    }
                    warn!("Enhancement failed for {}: {}", task.file_name, error);
                    observer.on_item_error(&task.file_name, &error.to_string());
                }
            }

            let completed = counter.advance();
            observer.on_progress(completed, counter.total());

            // Let the front end drain its events before the next item.
            tokio::task::yield_now().await;
        }

        self.state = BatchState::Completed;

        if summary.all_succeeded() {
            info!("Batch completed successfully: {} files processed", summary.succeeded);
        } else {
            warn!(
                "Batch completed with {} failed files out of {}",
                summary.failed, summary.total
            );
        }

        observer.on_batch_complete(&summary);
        Ok(summary)
    }

    /// Enumerates the directory once; the list is not refreshed during the run.
    async fn scan(&self, directory: &Path) -> EnhancerResult<Vec<EnhanceTask>> {
        let entries = list_entries(directory).await?;
        debug!("Found {} files in {}", entries.len(), directory.display());

        Ok(entries.into_iter().map(EnhanceTask::new).collect())
    }
}
