//! CRC24 checksum.
//!
//! The 24-bit CRC used alongside Radix-64 transport encoding to detect
//! corruption of the decoded payload. [`crc24`] is the single-shot form;
//! [`Crc24`] carries the running register for data that arrives in pieces.

use std::io;

/// Initial register value.
pub const CRC24_INIT: u32 = 0x00B7_04CE;

/// Generator polynomial, including the x^24 term.
pub const CRC24_POLY: u32 = 0x0186_4CFB;

/// Mask selecting the 24 result bits.
pub const CRC24_MASK: u32 = 0x00FF_FFFF;

const CRC24_TOP_BIT: u32 = 0x0100_0000;

/// Incremental CRC24 accumulator.
///
/// Feeding data through any sequence of [`update`](Crc24::update) calls gives
/// the same result as [`crc24`] over the concatenation.
///
/// # Example
/// ```
/// use radix64::{Crc24, crc24};
///
/// let mut crc = Crc24::new();
/// crc.update(b"Hello, ");
/// crc.update(b"world!");
/// assert_eq!(crc.finalize(), crc24(b"Hello, world!"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc24 {
    register: u32,
}

impl Crc24 {
    pub const fn new() -> Self {
        Crc24 {
            register: CRC24_INIT,
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.register ^= (byte as u32) << 16;
            for _ in 0..8 {
                self.register <<= 1;
                if self.register & CRC24_TOP_BIT != 0 {
                    self.register ^= CRC24_POLY;
                }
            }
        }
    }

    /// Returns the checksum without consuming the accumulator.
    pub const fn value(&self) -> u32 {
        self.register & CRC24_MASK
    }

    pub const fn finalize(self) -> u32 {
        self.value()
    }
}

impl Default for Crc24 {
    fn default() -> Self {
        Self::new()
    }
}

impl io::Write for Crc24 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Computes the CRC24 of `data` in one pass.
///
/// The empty input yields [`CRC24_INIT`].
pub fn crc24(data: &[u8]) -> u32 {
    let mut crc = Crc24::new();
    crc.update(data);
    crc.finalize()
}

/// Big-endian 3-byte form of a checksum, as carried next to Radix-64 payloads.
pub const fn crc24_to_bytes(value: u32) -> [u8; 3] {
    [(value >> 16) as u8, (value >> 8) as u8, value as u8]
}

pub const fn crc24_from_bytes(bytes: [u8; 3]) -> u32 {
    (bytes[0] as u32) << 16 | (bytes[1] as u32) << 8 | bytes[2] as u32
}
