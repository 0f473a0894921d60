use crate::cli::args::ConfigArgs;
use radix64::Settings;

pub fn handle(args: ConfigArgs, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    if args.paths {
        println!("Config files (later entries override earlier ones):\n");
        println!("  {:<50} built-in", "(embedded defaults)");
        for path in Settings::search_paths() {
            let status = if path.exists() { "found" } else { "missing" };
            println!("  {:<50} {}", path.display(), status);
        }
        return Ok(());
    }

    print!("{}", settings.to_toml()?);
    Ok(())
}
