/// Appended to the original file stem.
pub const OUTPUT_SUFFIX: &str = "_enhanced";

/// Every output is JPEG regardless of the input format.
pub const OUTPUT_EXTENSION: &str = "jpg";

/// JPEG quality for enhanced output (1-100).
pub const JPEG_QUALITY: u8 = 75;
