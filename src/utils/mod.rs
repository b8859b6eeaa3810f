pub mod error;
pub mod validation;
pub mod formats;
pub mod fs;

pub use error::{EnhancerError, EnhancerResult};
pub use validation::validate_directory_path;
pub use formats::{JPEG_QUALITY, OUTPUT_EXTENSION, OUTPUT_SUFFIX};
pub use fs::{derive_output_path, extract_filename, list_entries, remove_original};
