use std::path::{Path, PathBuf};
use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;
use crate::core::BatchSummary;

/// Completed/total pair for one batch.
///
/// `total` is fixed when the batch starts; `completed` only ever moves up by
/// one per item attempt and stops at `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressCounter {
    completed: usize,
    total: usize,
}

impl ProgressCounter {
    pub fn new(total: usize) -> Self {
        Self { completed: 0, total }
    }

    /// Records one finished item attempt and returns the new completed count.
    pub fn advance(&mut self) -> usize {
        debug_assert!(self.completed < self.total, "progress advanced past total");
        self.completed = (self.completed + 1).min(self.total);
        self.completed
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Progress percentage (0-100); an empty batch reports 100.
    pub fn percentage(&self) -> usize {
        if self.total > 0 {
            (self.completed * 100) / self.total
        } else {
            100
        }
    }
}

/// Notifications a front end receives while a batch runs.
///
/// The orchestrator never waits on a human: every call returns immediately
/// and it is up to the implementor whether to block, buffer or drop.
pub trait BatchObserver {
    /// The directory path was missing or empty; nothing was scanned.
    fn on_config_error(&mut self, message: &str);

    /// The directory could not be listed; no item was processed.
    fn on_enumeration_error(&mut self, message: &str);

    /// Scan finished with `total` entries; progress starts at `(0, total)`.
    fn on_batch_start(&mut self, _total: usize) {}

    /// One item failed. The batch continues.
    fn on_item_error(&mut self, file_name: &str, message: &str);

    /// One item was replaced by its enhanced output.
    fn on_item_complete(&mut self, _file_name: &str, _output_path: &Path) {}

    /// Emitted after every item attempt, success or failure.
    fn on_progress(&mut self, completed: usize, total: usize);

    /// Emitted once, after the last item.
    fn on_batch_complete(&mut self, summary: &BatchSummary);
}

/// Serializable form of every [`BatchObserver`] notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum BatchEvent {
    ConfigError {
        message: String,
    },
    EnumerationError {
        message: String,
    },
    BatchStarted {
        total: usize,
    },
    ItemError {
        file_name: String,
        message: String,
    },
    ItemCompleted {
        file_name: String,
        output_path: PathBuf,
    },
    Progress {
        completed: usize,
        total: usize,
        progress_percentage: usize,
    },
    BatchComplete {
        summary: BatchSummary,
    },
}

impl BatchEvent {
    pub fn progress(completed: usize, total: usize) -> Self {
        let mut counter = ProgressCounter::new(total);
        counter.completed = completed.min(total);
        Self::Progress {
            completed,
            total,
            progress_percentage: counter.percentage(),
        }
    }
}

/// Observer that buffers every notification as a [`BatchEvent`] on a channel.
///
/// Lets the front end consume events at its own pace on another task.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    sender: UnboundedSender<BatchEvent>,
}

impl ChannelObserver {
    pub fn new(sender: UnboundedSender<BatchEvent>) -> Self {
        Self { sender }
    }

    fn emit(&self, event: BatchEvent) {
        // A dropped receiver just means nobody is listening any more.
        let _ = self.sender.send(event);
    }
}

impl BatchObserver for ChannelObserver {
    fn on_config_error(&mut self, message: &str) {
        self.emit(BatchEvent::ConfigError { message: message.to_string() });
    }

    fn on_enumeration_error(&mut self, message: &str) {
        self.emit(BatchEvent::EnumerationError { message: message.to_string() });
    }

    fn on_batch_start(&mut self, total: usize) {
        self.emit(BatchEvent::BatchStarted { total });
    }

    fn on_item_error(&mut self, file_name: &str, message: &str) {
        self.emit(BatchEvent::ItemError {
            file_name: file_name.to_string(),
            message: message.to_string(),
        });
    }

    fn on_item_complete(&mut self, file_name: &str, output_path: &Path) {
        self.emit(BatchEvent::ItemCompleted {
            file_name: file_name.to_string(),
            output_path: output_path.to_path_buf(),
        });
    }

    fn on_progress(&mut self, completed: usize, total: usize) {
        self.emit(BatchEvent::progress(completed, total));
    }

    fn on_batch_complete(&mut self, summary: &BatchSummary) {
        self.emit(BatchEvent::BatchComplete { summary: *summary });
    }
}
