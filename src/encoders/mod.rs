pub mod algorithms;
pub mod streaming;

pub use algorithms::radix64;
