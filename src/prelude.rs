//! Convenient re-exports for common usage.
//!
//! This module provides a single import for the most commonly used types
//! and functions in radix64.
//!
//! # Example
//!
//! ```
//! use radix64::prelude::*;
//!
//! let encoded = encode_to_string(b"Hello");
//! assert_eq!(decode_to_vec(&encoded).unwrap(), b"Hello");
//! println!("{} {:06x}", encoded, crc24(b"Hello"));
//! ```

pub use crate::{
    // Checksum
    Crc24,
    DecodeError,

    // Config
    Settings,

    // Streaming
    StreamingDecoder,
    StreamingEncoder,

    crc24,

    // Core encoding/decoding
    decode,
    decode_to_vec,
    encode,
    encode_to_string,
};
