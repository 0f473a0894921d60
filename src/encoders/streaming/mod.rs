mod decoder;
mod encoder;

pub use decoder::StreamingDecoder;
pub use encoder::StreamingEncoder;

use std::io::{self, Read};

pub(crate) const DEFAULT_CHUNK_SIZE: usize = 4096; // 4KB chunks

/// Reads until `buffer` is full or the reader is exhausted.
///
/// Returns the number of bytes read; less than `buffer.len()` only at EOF.
fn fill_buffer<R: Read>(reader: &mut R, buffer: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        match reader.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
