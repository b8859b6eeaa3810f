//! Image processing pipeline.
//!
//! - [`codec`]: File ↔ RGB buffer conversion (decode any supported format, encode JPEG)
//! - [`transform`]: Fixed 2× cubic upscale followed by a Gaussian soften
//! - [`replace`]: Write the enhanced file, then delete the original
//! - [`executor`]: One item through the whole pipeline, failures isolated
//! - [`batch`]: Directory-wide orchestration and progress reporting

pub mod batch;
pub mod codec;
pub mod executor;
pub mod replace;
pub mod transform;

pub use batch::BatchProcessor;
