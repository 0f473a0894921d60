//! Radix-64 transport encoding with CRC24 checksums.
//!
//! Binary data is wrapped in ASCII-safe text by mapping every 3 bytes to 4
//! characters from `A-Z a-z 0-9 + /`, with `=` padding for a short final
//! group. A separate 24-bit CRC lets receivers detect corruption of the
//! decoded payload.
//!
//! # Example
//!
//! ```
//! use radix64::{crc24, decode_to_vec, encode_to_string};
//!
//! let data = [0x14, 0xFB, 0x9C, 0x03, 0xD9];
//! let text = encode_to_string(&data);
//! assert_eq!(text, "FPucA9k=");
//!
//! let decoded = decode_to_vec(&text).unwrap();
//! assert_eq!(decoded, data);
//! assert_eq!(crc24(&decoded), crc24(&data));
//! ```
//!
//! Message framing (armor headers, line wrapping, checksum lines) is left to
//! callers composing these primitives.

mod core;
mod encoders;
mod features;

pub mod prelude;

pub use crate::core::alphabet::{
    ALPHABET, PAD, Sextet, char_to_index, index_to_char, is_alphabet_char,
};
pub use crate::core::config::{ChecksumFormat, ChecksumSettings, DecodeSettings, Settings, StreamSettings};
pub use crate::encoders::algorithms::{DecodeError, should_use_color};
pub use crate::encoders::radix64::{decode, decoded_len, encode, encoded_len};
pub use crate::encoders::streaming::{StreamingDecoder, StreamingEncoder};
pub use crate::features::checksum::{CRC24_INIT, CRC24_MASK, CRC24_POLY};
pub use crate::features::{Crc24, crc24, crc24_from_bytes, crc24_to_bytes};

/// Encodes `data` into a new `String`.
pub fn encode_to_string(data: &[u8]) -> String {
    let mut out = Vec::with_capacity(encoded_len(data.len()));
    encode(data, &mut out).expect("writing to a Vec cannot fail");
    // The alphabet and pad are ASCII
    String::from_utf8(out).expect("Radix-64 output is ASCII")
}

/// Decodes Radix-64 text into a new `Vec<u8>`.
pub fn decode_to_vec(input: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
    let input = input.as_ref();
    let mut out = Vec::with_capacity(decoded_len(input)?);
    decode(input, &mut out)?;
    Ok(out)
}
