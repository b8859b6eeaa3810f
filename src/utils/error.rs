//! Error types for the image enhancer.
//!
//! Batch-fatal errors (`Config`, `Enumeration`) stop a run before any item
//! starts. Everything else is item-level and never crosses the item boundary.

use serde::Serialize;
use thiserror::Error;

/// Main error type for the enhancer.
///
/// Every variant carries a display message so it can be handed to a front end
/// as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EnhancerError {
    /// Directory path missing or empty
    #[error("Configuration error: {0}")]
    Config(String),

    /// Directory could not be listed
    #[error("Enumeration error: {0}")]
    Enumeration(String),

    /// File missing, unreadable, or not a decodable image
    #[error("Decode error: {0}")]
    Decode(String),

    /// Enhanced output could not be written
    #[error("Encode error: {0}")]
    Encode(String),

    /// Output was written but the original could not be deleted
    #[error("Remove error: {0}")]
    Remove(String),

    /// Anything else raised inside an item, panics included
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Convenience result type for enhancer operations.
pub type EnhancerResult<T> = Result<T, EnhancerError>;

// Helper methods for error creation
impl EnhancerError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        Self::Config(msg.into())
    }

    pub fn enumeration<T: Into<String>>(msg: T) -> Self {
        Self::Enumeration(msg.into())
    }

    pub fn decode<T: Into<String>>(msg: T) -> Self {
        Self::Decode(msg.into())
    }

    pub fn encode<T: Into<String>>(msg: T) -> Self {
        Self::Encode(msg.into())
    }

    pub fn remove<T: Into<String>>(msg: T) -> Self {
        Self::Remove(msg.into())
    }

    pub fn unexpected<T: Into<String>>(msg: T) -> Self {
        Self::Unexpected(msg.into())
    }

    /// Whether this error aborts the whole batch rather than a single item.
    pub fn is_batch_fatal(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Enumeration(_))
    }
}
