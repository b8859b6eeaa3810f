// Module declarations in dependency order
pub mod commands;
pub mod core;
pub mod processing;
pub mod utils;

// Public exports for external consumers
pub use crate::core::{BatchEvent, BatchObserver, BatchState, BatchSummary, ChannelObserver, ItemOutcome};
pub use processing::BatchProcessor;
pub use utils::{EnhancerError, EnhancerResult};
pub use commands::*;

// This library file is used as a public API for consuming this crate as a library.
// The console front end lives in main.rs.
