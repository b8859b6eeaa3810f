//! Front-end entry point for enhancing a folder.

use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::core::{BatchEvent, BatchSummary, ChannelObserver};
use crate::processing::BatchProcessor;
use crate::utils::EnhancerResult;

/// A batch running in the background.
pub struct EnhanceJob {
    /// Every notification of the batch, in order. Closes when the batch ends.
    pub events: UnboundedReceiver<BatchEvent>,
    /// Resolves to the batch summary, or the batch-fatal error.
    pub handle: JoinHandle<EnhancerResult<BatchSummary>>,
}

/// Enhances every file in `directory` on the async runtime.
///
/// Must be called from within a Tokio runtime. Notifications are buffered, so
/// the caller can show item errors however it likes (including one at a time)
/// without stalling the batch.
///
/// # Arguments
/// * `directory` - Folder chosen by the user; an empty string yields a config error event
///
/// # Events Emitted
/// * `configError` / `enumerationError` - batch-fatal, nothing processed
/// * `batchStarted` - entry count known
/// * `itemCompleted` / `itemError` - one per item
/// * `progress` - after every item
/// * `batchComplete` - once, with the summary
pub fn enhance_folder(directory: String) -> EnhanceJob {
    debug!("Received enhance_folder command for '{}'", directory);

    let (sender, events) = mpsc::unbounded_channel();
    let handle = tokio::spawn(async move {
        let mut observer = ChannelObserver::new(sender);
        BatchProcessor::new().run(&directory, &mut observer).await
    });

    EnhanceJob { events, handle }
}
