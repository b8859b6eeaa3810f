//! Core types for item outcomes and batch results.

use std::path::PathBuf;
use serde::Serialize;
use crate::utils::{EnhancerError, EnhancerResult};

/// Result of processing one item.
///
/// Surfaced to the front end right away and then dropped; the batch keeps
/// only counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ItemOutcome {
    /// Enhanced file written and original deleted
    Succeeded {
        output_path: PathBuf,
    },
    /// Any step failed; see the error for which one
    Failed {
        error: EnhancerError,
    },
}

impl ItemOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }
}

impl From<EnhancerResult<PathBuf>> for ItemOutcome {
    fn from(result: EnhancerResult<PathBuf>) -> Self {
        match result {
            Ok(output_path) => Self::Succeeded { output_path },
            Err(error) => Self::Failed { error },
        }
    }
}

/// Aggregate result of one batch, delivered with the completion notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    /// Number of entries found at scan time
    pub total: usize,
    /// Items whose enhanced output was written and original deleted
    pub succeeded: usize,
    /// Items reported through an item error
    pub failed: usize,
}

impl BatchSummary {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn record(&mut self, outcome: &ItemOutcome) {
        if outcome.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }

    /// True when no item failed (vacuously true for an empty batch).
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_outcomes() {
        let mut summary = BatchSummary::new(3);
        summary.record(&ItemOutcome::Succeeded { output_path: "a_enhanced.jpg".into() });
        summary.record(&ItemOutcome::Failed { error: EnhancerError::decode("nope") });
        summary.record(&ItemOutcome::from(EnhancerResult::Ok(PathBuf::from("c_enhanced.jpg"))));

        assert_eq!(summary, BatchSummary { total: 3, succeeded: 2, failed: 1 });
        assert!(!summary.all_succeeded());
    }

    #[test]
    fn empty_summary_counts_as_success() {
        assert!(BatchSummary::new(0).all_succeeded());
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let outcome = ItemOutcome::Succeeded { output_path: "x_enhanced.jpg".into() };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "succeeded");
        assert_eq!(json["outputPath"], "x_enhanced.jpg");
    }
}
