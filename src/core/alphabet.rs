//! The Radix-64 symbol table.
//!
//! Maps 6-bit indices to the 64-character alphabet `A-Z a-z 0-9 + /` and back.
//! The pad character `=` is deliberately absent from the reverse table; callers
//! handle padding before looking characters up.

/// The 64 alphabet characters, in index order.
pub const ALPHABET: [u8; 64] = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Pad character appended to a final group of fewer than 3 input bytes.
pub const PAD: u8 = b'=';

const INVALID: u8 = 0xFF;

const DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// A 6-bit index in `0..=63`.
///
/// Every `Sextet` names exactly one alphabet character, so [`index_to_char`]
/// has no failure path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sextet(u8);

impl Sextet {
    /// Largest valid index.
    pub const MAX: u8 = 63;

    /// Returns `None` if `value` does not fit in 6 bits.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX {
            Some(Sextet(value))
        } else {
            None
        }
    }

    /// Keeps only the low 6 bits of `bits`.
    pub const fn from_low_bits(bits: u32) -> Self {
        Sextet((bits & 0x3F) as u8)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Maps a 6-bit index to its alphabet character.
pub const fn index_to_char(index: Sextet) -> u8 {
    ALPHABET[index.0 as usize]
}

/// Maps an alphabet character back to its 6-bit index.
///
/// Returns `None` for anything outside the alphabet, including [`PAD`].
pub const fn char_to_index(c: u8) -> Option<Sextet> {
    match DECODE_TABLE[c as usize] {
        INVALID => None,
        index => Some(Sextet(index)),
    }
}

/// Returns true if `c` is one of the 64 alphabet characters.
pub const fn is_alphabet_char(c: u8) -> bool {
    DECODE_TABLE[c as usize] != INVALID
}
