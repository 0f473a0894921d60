use crate::cli::{args::Crc24Args, checksum::format_checksum, commands::open_input};
use radix64::{Crc24, Settings};
use std::io;

pub fn handle(args: Crc24Args, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let mut reader = open_input(args.file.as_ref())?;

    // Checksum incrementally; no size limit applies
    let mut crc = Crc24::new();
    let total = io::copy(&mut reader, &mut crc)?;
    tracing::debug!(bytes = total, "checksummed input");

    let format = args.format.unwrap_or(settings.checksum.format);
    tracing::debug!(format = format.as_str(), "printing checksum");
    println!("{}", format_checksum(crc.finalize(), format));

    Ok(())
}
