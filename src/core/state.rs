//! Batch run state machine.

use serde::Serialize;

/// Lifecycle of one batch run.
///
/// `Idle → Scanning → Processing(i = 1..N) → Completed`. A failed or empty
/// scan goes straight from `Scanning` to `Completed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "state")]
pub enum BatchState {
    #[default]
    Idle,
    Scanning,
    Processing {
        /// 1-based index of the item in flight
        current: usize,
        total: usize,
    },
    Completed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        assert_eq!(BatchState::default(), BatchState::Idle);
    }

    #[test]
    fn processing_serializes_with_position() {
        let json = serde_json::to_value(BatchState::Processing { current: 1, total: 2 }).unwrap();
        assert_eq!(json, serde_json::json!({ "state": "processing", "current": 1, "total": 2 }));
    }
}
