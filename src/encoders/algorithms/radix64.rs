use crate::core::alphabet::{PAD, Sextet, char_to_index, index_to_char};
use std::io::{self, Write};

pub use super::errors::DecodeError;

/// Number of characters produced for `input_len` bytes.
pub const fn encoded_len(input_len: usize) -> usize {
    input_len.div_ceil(3) * 4
}

/// Encodes one group of 1 to 3 bytes as 4 characters, padding short groups.
///
/// # Panics
///
/// Panics if `chunk` is empty or longer than 3 bytes.
pub(crate) fn encode_group(chunk: &[u8]) -> [u8; 4] {
    assert!(
        (1..=3).contains(&chunk.len()),
        "group must hold 1 to 3 bytes, got {}",
        chunk.len()
    );

    let mut window = 0u32;
    for (i, &byte) in chunk.iter().enumerate() {
        window |= (byte as u32) << (16 - 8 * i);
    }

    let data_chars = chunk.len() + 1;
    let mut out = [PAD; 4];
    for (i, slot) in out.iter_mut().take(data_chars).enumerate() {
        *slot = index_to_char(Sextet::from_low_bits(window >> (18 - 6 * i)));
    }
    out
}

/// Encodes `input` as Radix-64 text, writing one 4-character group at a time.
///
/// Total over all inputs; the only failure is the sink's own.
pub fn encode<W: Write>(input: &[u8], out: &mut W) -> io::Result<()> {
    let groups = input.chunks_exact(3);
    let tail = groups.remainder();

    for group in groups {
        out.write_all(&encode_group(group))?;
    }

    if !tail.is_empty() {
        out.write_all(&encode_group(tail))?;
    }

    Ok(())
}

/// Length of the data portion of `input`, excluding trailing padding.
///
/// Only the last two positions are inspected; any other `=` stays in range and
/// is rejected during decoding.
fn effective_len(input: &[u8]) -> usize {
    match input {
        [.., PAD, PAD] => input.len() - 2,
        [.., PAD] => input.len() - 1,
        _ => input.len(),
    }
}

/// Packs up to 4 sextets back into bytes, returning how many were produced.
///
/// A lone sextet is not a valid Radix-64 tail. It still yields one byte built
/// from its 6 bits (`index << 2`) so malformed input degrades instead of
/// panicking; `decode` never reaches that case because its length and padding
/// checks only leave tails of 2 or 3 characters.
fn unpack_group(sextets: &[Sextet], out: &mut [u8; 3]) -> usize {
    let mut window = 0u32;
    for (i, s) in sextets.iter().enumerate() {
        window |= (s.value() as u32) << (18 - 6 * i);
    }

    let produced = match sextets.len() {
        0 => 0,
        1 => 1,
        n => n - 1,
    };
    for (i, slot) in out.iter_mut().take(produced).enumerate() {
        *slot = (window >> (16 - 8 * i)) as u8;
    }
    produced
}

/// Exact number of bytes `decode` produces for `input`.
///
/// Validates the length only; characters are checked by `decode`.
pub fn decoded_len(input: &[u8]) -> Result<usize, DecodeError> {
    if input.len() % 4 != 0 {
        return Err(DecodeError::invalid_length(input.len()));
    }
    let data = effective_len(input);
    Ok(data / 4 * 3 + (data % 4).saturating_sub(1))
}

/// Decodes Radix-64 text, writing reconstructed bytes to `out` as each group
/// completes.
///
/// On error, bytes from groups preceding the failure may already be written.
pub fn decode<W: Write>(input: &[u8], out: &mut W) -> Result<(), DecodeError> {
    decode_at(input, 0, out)
}

/// Like [`decode`], with error positions shifted by `offset`. Used by the
/// streaming decoder, which feeds the input in slices.
pub(crate) fn decode_at<W: Write>(
    input: &[u8],
    offset: usize,
    out: &mut W,
) -> Result<(), DecodeError> {
    if input.len() % 4 != 0 {
        return Err(DecodeError::invalid_length(offset + input.len()));
    }

    let data = &input[..effective_len(input)];
    let mut sextets = [Sextet::from_low_bits(0); 4];
    let mut bytes = [0u8; 3];

    for (group_index, group) in data.chunks(4).enumerate() {
        let start = offset + group_index * 4;
        for (i, &c) in group.iter().enumerate() {
            sextets[i] =
                char_to_index(c).ok_or_else(|| DecodeError::invalid_character(c, start + i))?;
        }

        let produced = unpack_group(&sextets[..group.len()], &mut bytes);
        out.write_all(&bytes[..produced])?;
    }

    Ok(())
}
