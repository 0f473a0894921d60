use clap::{Args, Subcommand};
use radix64::ChecksumFormat;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Encode binary data as Radix-64 text
    Encode(EncodeArgs),
    /// Decode Radix-64 text back to binary
    Decode(DecodeArgs),
    /// Compute the CRC24 checksum of raw data
    Crc24(Crc24Args),
    /// Show effective configuration
    Config(ConfigArgs),
}

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Use streaming mode for large files
    #[arg(short = 's', long)]
    pub stream: bool,

    /// Print the CRC24 of the input to stderr
    #[arg(long)]
    pub checksum: bool,

    /// Do not append a newline when writing to stdout
    #[arg(short = 'n', long)]
    pub no_newline: bool,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Use streaming mode for large files
    #[arg(short = 's', long)]
    pub stream: bool,

    /// Print the CRC24 of the decoded data to stderr
    #[arg(long)]
    pub checksum: bool,

    /// Fail unless the decoded data has this CRC24 (6 hex digits or 4 Radix-64 characters)
    #[arg(long, value_name = "CRC")]
    pub expect_crc: Option<String>,
}

/// Arguments for computing a checksum
#[derive(Args, Debug)]
pub struct Crc24Args {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output format: hex, radix64 or decimal (default from config)
    #[arg(long)]
    pub format: Option<ChecksumFormat>,
}

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// List the config file locations that are searched
    #[arg(long)]
    pub paths: bool,
}
