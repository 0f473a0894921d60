pub mod errors;
pub mod radix64;

// Re-export error types for public API
pub use errors::{DecodeError, should_use_color};
