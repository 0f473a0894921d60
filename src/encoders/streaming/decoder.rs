use crate::core::alphabet::PAD;
use crate::encoders::algorithms::DecodeError;
use crate::encoders::algorithms::radix64;
use crate::features::checksum::Crc24;
use std::io::{Read, Write};

use super::{DEFAULT_CHUNK_SIZE, fill_buffer};

/// Streaming decoder for processing large amounts of encoded data efficiently.
///
/// Complete 4-character groups are decoded as soon as they arrive; a partial
/// group is carried over to the next read. Padding may only appear in the
/// last group of the stream.
pub struct StreamingDecoder<W: Write> {
    writer: W,
    chunk_size: usize,
    checksum: bool,
    ignore_whitespace: bool,
}

impl<W: Write> StreamingDecoder<W> {
    /// Creates a new streaming decoder writing raw bytes to `writer`.
    pub fn new(writer: W) -> Self {
        StreamingDecoder {
            writer,
            chunk_size: DEFAULT_CHUNK_SIZE,
            checksum: false,
            ignore_whitespace: false,
        }
    }

    /// Sets the read size in bytes (minimum 4).
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(4);
        self
    }

    /// Computes the CRC24 of the decoded output.
    pub fn with_checksum(mut self) -> Self {
        self.checksum = true;
        self
    }

    /// Skip ASCII whitespace (such as line breaks) between characters.
    ///
    /// Skipped bytes do not count towards error positions or the length check.
    pub fn ignore_whitespace(mut self, ignore: bool) -> Self {
        self.ignore_whitespace = ignore;
        self
    }

    /// Decodes everything `reader` yields.
    ///
    /// Returns the CRC24 of the decoded bytes if checksumming was enabled.
    pub fn decode<R: Read>(&mut self, reader: &mut R) -> Result<Option<u32>, DecodeError> {
        let mut read_buffer = vec![0u8; self.chunk_size];
        let mut pending: Vec<u8> = Vec::with_capacity(self.chunk_size + 3);
        let mut decoded: Vec<u8> = Vec::with_capacity(self.chunk_size / 4 * 3);
        let mut crc = self.checksum.then(Crc24::new);
        // Characters already handed to the decoder
        let mut consumed = 0usize;
        let mut finished = false;

        loop {
            let filled = fill_buffer(reader, &mut read_buffer)?;
            if filled == 0 {
                break;
            }

            for &c in &read_buffer[..filled] {
                if self.ignore_whitespace && c.is_ascii_whitespace() {
                    continue;
                }
                if finished {
                    // Data after a padded group
                    return Err(DecodeError::invalid_character(c, consumed + pending.len()));
                }
                pending.push(c);
            }

            let complete = pending.len() / 4 * 4;
            if complete > 0 {
                decoded.clear();
                radix64::decode_at(&pending[..complete], consumed, &mut decoded)?;
                finished = pending[complete - 1] == PAD;

                if let Some(ref mut c) = crc {
                    c.update(&decoded);
                }
                self.writer.write_all(&decoded)?;

                consumed += complete;
                pending.drain(..complete);
                tracing::trace!(chars = complete, consumed, "decoded chunk");

                if finished && !pending.is_empty() {
                    return Err(DecodeError::invalid_character(pending[0], consumed));
                }
            }
        }

        if !pending.is_empty() {
            return Err(DecodeError::invalid_length(consumed + pending.len()));
        }

        self.writer.flush()?;
        tracing::debug!(consumed, "streaming decode finished");
        Ok(crc.map(Crc24::finalize))
    }

    /// Consumes the decoder, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
