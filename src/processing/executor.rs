// src/processing/executor.rs

//! Per-item pipeline: decode → transform → replace.
//!
//! Each item runs inside `tokio::task::spawn_blocking` so the runtime that
//! delivers notifications stays responsive. Only one item is ever in flight;
//! the caller awaits each one before dispatching the next.

use std::any::Any;
use std::path::Path;

use tokio::task::JoinError;
use tracing::debug;

use crate::core::{EnhanceTask, ItemOutcome};
use crate::utils::EnhancerError;

use super::codec::decode;
use super::replace::replace;
use super::transform::transform;

/// Runs the full pipeline for `task` and returns its outcome.
///
/// Never fails: every error, including a panic in the worker, becomes
/// `ItemOutcome::Failed`.
pub async fn execute(task: &EnhanceTask) -> ItemOutcome {
    let input_path = task.input_path.clone();
    isolate(move || enhance_single(&input_path)).await
}

/// Item boundary. Runs `work` on the blocking pool and turns a panic or
/// cancellation into an `Unexpected` failure.
pub async fn isolate<F>(work: F) -> ItemOutcome
where
    F: FnOnce() -> ItemOutcome + Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .unwrap_or_else(|e| ItemOutcome::Failed {
            error: EnhancerError::unexpected(describe_join_error(e)),
        })
}

// ── Blocking image processing (runs on tokio's blocking thread pool) ──────────────────

fn enhance_single(input_path: &Path) -> ItemOutcome {
    let buffer = match decode(input_path) {
        Ok(buffer) => buffer,
        Err(error) => return ItemOutcome::Failed { error },
    };

    let enhanced = transform(&buffer);
    debug!(
        "Enhanced '{}': {}×{} → {}×{}",
        input_path.display(),
        buffer.width(),
        buffer.height(),
        enhanced.width(),
        enhanced.height()
    );
    drop(buffer);

    replace(input_path, &enhanced)
}

fn describe_join_error(err: JoinError) -> String {
    if err.is_cancelled() {
        return "Task was cancelled".to_string();
    }
    match err.try_into_panic() {
        Ok(payload) => format!("Task panicked: {}", panic_message(&*payload)),
        Err(err) => format!("Task failed: {err}"),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        *msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "unknown panic"
    }
}
