use crate::encoders::algorithms::radix64;
use crate::features::checksum::Crc24;
use std::io::{self, Read, Write};

use super::{DEFAULT_CHUNK_SIZE, fill_buffer};

/// Streaming encoder for processing large amounts of data efficiently.
///
/// Reads the input in fixed chunks whose size is a multiple of 3, so only the
/// final chunk can produce padding and the output matches a one-shot
/// [`encode`](crate::encode) of the whole input.
pub struct StreamingEncoder<W: Write> {
    writer: W,
    chunk_size: usize,
    checksum: bool,
}

impl<W: Write> StreamingEncoder<W> {
    /// Creates a new streaming encoder writing Radix-64 text to `writer`.
    pub fn new(writer: W) -> Self {
        StreamingEncoder {
            writer,
            chunk_size: DEFAULT_CHUNK_SIZE / 3 * 3,
            checksum: false,
        }
    }

    /// Sets the read size in bytes, rounded down to a multiple of 3 (minimum 3).
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = (chunk_size / 3 * 3).max(3);
        self
    }

    /// Computes the CRC24 of the raw input while encoding.
    pub fn with_checksum(mut self) -> Self {
        self.checksum = true;
        self
    }

    /// Encodes everything `reader` yields.
    ///
    /// Returns the CRC24 of the input if checksumming was enabled.
    pub fn encode<R: Read>(&mut self, reader: &mut R) -> io::Result<Option<u32>> {
        let mut buffer = vec![0u8; self.chunk_size];
        let mut crc = self.checksum.then(Crc24::new);
        let mut total = 0usize;

        loop {
            let filled = fill_buffer(reader, &mut buffer)?;
            if filled == 0 {
                break;
            }

            let chunk = &buffer[..filled];
            if let Some(ref mut c) = crc {
                c.update(chunk);
            }
            radix64::encode(chunk, &mut self.writer)?;
            total += filled;
            tracing::trace!(bytes = filled, total, "encoded chunk");

            if filled < buffer.len() {
                break;
            }
        }

        self.writer.flush()?;
        tracing::debug!(total, "streaming encode finished");
        Ok(crc.map(Crc24::finalize))
    }

    /// Consumes the encoder, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode_to_string;

    /// Reader that hands out at most `step` bytes per call.
    struct Trickle<'a> {
        data: &'a [u8],
        step: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.step.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn test_matches_one_shot_encode() {
        let data: Vec<u8> = (0..10_000).map(|i| (i % 256) as u8).collect();

        let mut encoder = StreamingEncoder::new(Vec::new()).with_chunk_size(100);
        encoder.encode(&mut &data[..]).unwrap();

        assert_eq!(encoder.into_inner(), encode_to_string(&data).into_bytes());
    }

    #[test]
    fn test_short_reads_do_not_pad_midstream() {
        let data = b"short reads must not introduce padding in the middle";
        let mut reader = Trickle { data, step: 5 };

        let mut encoder = StreamingEncoder::new(Vec::new()).with_chunk_size(9);
        encoder.encode(&mut reader).unwrap();

        assert_eq!(encoder.into_inner(), encode_to_string(data).into_bytes());
    }

    #[test]
    fn test_default_chunk_size_spans_reads_without_padding() {
        let data = vec![0xABu8; 5000];

        let mut encoder = StreamingEncoder::new(Vec::new());
        assert_eq!(encoder.chunk_size % 3, 0);
        encoder.encode(&mut &data[..]).unwrap();

        let out = encoder.into_inner();
        assert_eq!(out, encode_to_string(&data).into_bytes());
        // 5000 bytes leave a 2-byte tail: one pad, and only at the very end
        assert_eq!(out.iter().position(|&b| b == b'='), Some(out.len() - 1));
    }

    #[test]
    fn test_chunk_size_rounding() {
        assert_eq!(StreamingEncoder::new(Vec::new()).with_chunk_size(10).chunk_size, 9);
        assert_eq!(StreamingEncoder::new(Vec::new()).with_chunk_size(1).chunk_size, 3);
    }

    #[test]
    fn test_checksum() {
        let data = b"checksummed while encoding";
        let mut encoder = StreamingEncoder::new(Vec::new()).with_checksum();
        let crc = encoder.encode(&mut &data[..]).unwrap();
        assert_eq!(crc, Some(crate::crc24(data)));

        let mut plain = StreamingEncoder::new(Vec::new());
        assert_eq!(plain.encode(&mut &data[..]).unwrap(), None);
    }

    #[test]
    fn test_empty_input() {
        let mut encoder = StreamingEncoder::new(Vec::new()).with_checksum();
        let crc = encoder.encode(&mut io::empty()).unwrap();
        assert_eq!(crc, Some(0xB704CE));
        assert!(encoder.into_inner().is_empty());
    }
}
