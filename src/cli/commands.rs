use crate::cli::global::GlobalArgs;
use radix64::{Settings, StreamingDecoder, StreamingEncoder};
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

/// Reads the whole input, enforcing `--max-size` unless `--force` is given.
pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        // Check file size if max_size is set
        if global.max_size > 0 {
            let metadata = fs::metadata(file_path)?;
            let file_size = metadata.len() as usize;

            if file_size > global.max_size {
                if global.force {
                    if !global.quiet {
                        tracing::warn!(
                            "Processing large file ({} bytes, limit: {} bytes)",
                            file_size,
                            global.max_size
                        );
                    }
                } else {
                    return Err(format!(
                        "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                        file_size, global.max_size
                    )
                    .into());
                }
            }
        }

        Ok(fs::read(file_path)?)
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;

        // Check stdin size after reading
        if global.max_size > 0 && buffer.len() > global.max_size && !global.force {
            return Err(format!(
                "Input size ({} bytes) exceeds maximum ({} bytes). Use --stream or --force for large inputs.",
                buffer.len(),
                global.max_size
            )
            .into());
        }

        Ok(buffer)
    }
}

/// Opens the input for streaming: the file if given, stdin otherwise.
pub fn open_input(file: Option<&PathBuf>) -> io::Result<Box<dyn Read>> {
    match file {
        Some(path) => Ok(Box::new(File::open(path)?)),
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Opens the output: the file if given, stdout otherwise.
pub fn open_output(file: Option<&PathBuf>) -> io::Result<Box<dyn Write>> {
    match file {
        Some(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Streaming encode from file/stdin to `output`.
///
/// Returns the CRC24 of the input when `checksum` is set.
pub fn streaming_encode(
    file: Option<&PathBuf>,
    output: &mut dyn Write,
    settings: &Settings,
    checksum: bool,
) -> Result<Option<u32>, Box<dyn std::error::Error>> {
    let mut reader = open_input(file)?;

    let mut encoder = StreamingEncoder::new(output).with_chunk_size(settings.stream.chunk_size);
    if checksum {
        encoder = encoder.with_checksum();
    }

    Ok(encoder.encode(&mut reader)?)
}

/// Streaming decode from file/stdin to `output`.
///
/// Whitespace is always skipped here: a trailing newline cannot be trimmed
/// without buffering the whole input.
pub fn streaming_decode(
    file: Option<&PathBuf>,
    output: &mut dyn Write,
    settings: &Settings,
    checksum: bool,
) -> Result<Option<u32>, Box<dyn std::error::Error>> {
    let mut reader = open_input(file)?;

    let mut decoder = StreamingDecoder::new(output)
        .with_chunk_size(settings.stream.chunk_size)
        .ignore_whitespace(true);
    if checksum {
        decoder = decoder.with_checksum();
    }

    Ok(decoder.decode(&mut reader)?)
}
