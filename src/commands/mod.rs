//! Entry points for front ends.
//!
//! - [`enhance_folder`]: Start a batch and receive its notifications as a buffered event stream

mod enhance;

pub use enhance::*;
