mod args;
mod checksum;
mod commands;
mod global;
mod handlers;

use args::Commands;
use clap::Parser;
use global::GlobalArgs;
use radix64::{DecodeError, Settings};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "radix64")]
#[command(version)]
#[command(about = "Radix-64 transport encoding with CRC24 checksums", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let use_color = !cli.global.no_color && radix64::should_use_color();

    init_tracing(&cli.global);
    execute(cli).map_err(|e| present(e, use_color))
}

fn execute(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let explicit_config = cli
        .global
        .config
        .as_deref()
        .map(|path| PathBuf::from(shellexpand::tilde(path).as_ref()));
    let settings = Settings::load_with_overrides(explicit_config.as_deref())?;
    tracing::debug!(?settings, "effective settings");

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &settings),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &settings),
        Commands::Crc24(args) => handlers::checksum::handle(args, &settings),
        Commands::Config(args) => handlers::config::handle(args, &settings),
    }
}

/// Renders decode errors with the CLI's color choice; other errors pass through.
fn present(err: Box<dyn std::error::Error>, use_color: bool) -> Box<dyn std::error::Error> {
    match err.downcast::<DecodeError>() {
        Ok(decode_err) => decode_err.render(use_color).into(),
        Err(other) => other,
    }
}

/// Logs go to stderr so they never mix with encoded output.
fn init_tracing(global: &GlobalArgs) {
    let default_level = if global.quiet {
        "error"
    } else {
        match global.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!global.no_color)
        .with_target(false)
        .without_time()
        .try_init();
}
