use crate::cli::{
    args::DecodeArgs,
    checksum::{format_checksum, parse_expected, verify},
    commands::{open_output, read_input, streaming_decode},
    global::GlobalArgs,
};
use radix64::Settings;
use std::io::Write;

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    // Parsed up front so a malformed value fails before any output is written
    let expected = args.expect_crc.as_deref().map(parse_expected).transpose()?;
    let want_crc = args.checksum || expected.is_some();

    // Streaming writes as it goes, so a mismatch is only reported afterwards
    if args.stream {
        let mut output = open_output(args.output.as_ref())?;
        let crc = streaming_decode(args.file.as_ref(), &mut output, settings, want_crc)?;
        output.flush()?;
        return finish(&args, settings, expected, crc);
    }

    let input_data = read_input(args.file.as_ref(), global)?;
    let mut text = input_data.trim_ascii().to_vec();
    if settings.decode.ignore_whitespace {
        text.retain(|b| !b.is_ascii_whitespace());
    }
    tracing::debug!(chars = text.len(), "decoding");

    let data = radix64::decode_to_vec(&text)?;
    let crc = want_crc.then(|| radix64::crc24(&data));

    // Verify before writing so corrupted payloads never reach the output
    if let (Some(expected), Some(actual)) = (expected, crc) {
        verify(expected, actual)?;
    }

    let mut output = open_output(args.output.as_ref())?;
    output.write_all(&data)?;
    output.flush()?;

    if args.checksum
        && let Some(crc) = crc
    {
        eprintln!("CRC24: {}", format_checksum(crc, settings.checksum.format));
    }

    Ok(())
}

fn finish(
    args: &DecodeArgs,
    settings: &Settings,
    expected: Option<u32>,
    crc: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(crc) = crc else {
        return Ok(());
    };

    if args.checksum {
        eprintln!("CRC24: {}", format_checksum(crc, settings.checksum.format));
    }
    if let Some(expected) = expected {
        verify(expected, crc)?;
    }
    Ok(())
}
