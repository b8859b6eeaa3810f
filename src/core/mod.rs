//! Core application types and state management.
//!
//! This module contains the fundamental types used throughout the application:
//! - [`EnhanceTask`]: One directory entry queued for enhancement
//! - [`ItemOutcome`] / [`BatchSummary`]: Per-item and per-batch results
//! - [`BatchState`]: Lifecycle of a batch run
//! - [`ProgressCounter`] / [`BatchObserver`]: Progress tracking and front-end notifications

mod state;
mod types;
mod task;
mod progress;

pub use state::BatchState;
pub use types::{BatchSummary, ItemOutcome};
pub use task::EnhanceTask;
pub use progress::{BatchEvent, BatchObserver, ChannelObserver, ProgressCounter};
