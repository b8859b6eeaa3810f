mod claims;
mod processor;

pub use processor::BatchProcessor;
