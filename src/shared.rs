pub mod types;
pub mod settings;
pub mod errors;
pub mod error;


// Re-export ConversionError for convenience
pub use errors::{ConversionError, ConversionResult};
