//! Optional features module.
//!
//! Functionality that sits beside the codec rather than inside it. Callers
//! combine the checksum with encoding and decoding themselves.

pub mod checksum;

pub use checksum::{Crc24, crc24, crc24_from_bytes, crc24_to_bytes};
