use crate::cli::{
    args::EncodeArgs,
    checksum::format_checksum,
    commands::{open_output, read_input, streaming_encode},
    global::GlobalArgs,
};
use radix64::Settings;
use std::io::Write;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut output = open_output(args.output.as_ref())?;

    let crc = if args.stream {
        streaming_encode(args.file.as_ref(), &mut output, settings, args.checksum)?
    } else {
        let input_data = read_input(args.file.as_ref(), global)?;
        tracing::debug!(bytes = input_data.len(), "encoding");

        radix64::encode(&input_data, &mut output)?;
        args.checksum.then(|| radix64::crc24(&input_data))
    };

    if args.output.is_none() && !args.no_newline {
        output.write_all(b"\n")?;
    }
    output.flush()?;

    // Checksum goes to stderr, after the main output
    if let Some(crc) = crc {
        eprintln!("CRC24: {}", format_checksum(crc, settings.checksum.format));
    }

    Ok(())
}
