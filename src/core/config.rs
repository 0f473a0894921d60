use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How a CRC24 value is printed.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChecksumFormat {
    /// Six lowercase hex digits, e.g. `b704ce`
    #[default]
    Hex,
    /// The 3 checksum bytes in Radix-64, e.g. `twTO`
    Radix64,
    /// Plain decimal integer
    Decimal,
}

impl ChecksumFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChecksumFormat::Hex => "hex",
            ChecksumFormat::Radix64 => "radix64",
            ChecksumFormat::Decimal => "decimal",
        }
    }
}

impl std::str::FromStr for ChecksumFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hex" => Ok(ChecksumFormat::Hex),
            "radix64" | "base64" => Ok(ChecksumFormat::Radix64),
            "decimal" | "dec" => Ok(ChecksumFormat::Decimal),
            _ => Err(format!(
                "Unknown checksum format: {}. Expected hex, radix64 or decimal",
                s
            )),
        }
    }
}

/// Streaming settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct StreamSettings {
    /// Bytes read per chunk in streaming mode
    pub chunk_size: usize,
}

/// Decoding settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DecodeSettings {
    /// Skip whitespace inside encoded input (e.g. line breaks from wrapping)
    pub ignore_whitespace: bool,
}

/// Checksum display settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ChecksumSettings {
    pub format: ChecksumFormat,
}

/// Global settings for radix64.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Settings {
    pub stream: StreamSettings,
    pub decode: DecodeSettings,
    pub checksum: ChecksumSettings,
}

const BUILTIN_CONFIG: &str = include_str!("../../config/default.toml");

impl Settings {
    /// Parses settings from TOML content.
    ///
    /// Every key must be present; partial files are merged over the built-in
    /// defaults by [`Settings::load_with_overrides`].
    pub fn from_toml(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let table: toml::Table = toml::from_str(content)?;
        Self::from_table(table)
    }

    fn from_table(table: toml::Table) -> Result<Self, Box<dyn std::error::Error>> {
        let settings: Settings = toml::Value::Table(table).try_into()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), String> {
        if self.stream.chunk_size == 0 {
            return Err("stream.chunk_size must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Loads the built-in settings.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_toml(BUILTIN_CONFIG)
    }

    /// Standard override locations, lowest priority first.
    ///
    /// 1. `~/.config/radix64/config.toml` (user overrides)
    /// 2. `./radix64.toml` (project-local overrides)
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("radix64").join("config.toml"));
        }
        paths.push(PathBuf::from("radix64.toml"));
        paths
    }

    /// Loads settings with user overrides from standard locations, then from
    /// `explicit` if given.
    ///
    /// Later files override earlier ones key by key. Broken files in the
    /// standard locations are skipped with a warning; a broken `explicit` file
    /// is an error.
    pub fn load_with_overrides(explicit: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut merged: toml::Table = toml::from_str(BUILTIN_CONFIG)?;

        for path in Self::search_paths() {
            if path.exists() {
                apply_standard_overlay(&mut merged, &path);
            }
        }

        if let Some(path) = explicit {
            let overlay = read_table(path)
                .map_err(|e| format!("Failed to load config from {}: {}", path.display(), e))?;
            tracing::debug!(path = %path.display(), "loaded explicit config");
            merge_tables(&mut merged, overlay);
        }

        Self::from_table(merged)
    }

    /// Renders the settings as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Merges the file at `path` into `merged` only if the result is still valid
/// settings; otherwise warns and leaves `merged` untouched.
fn apply_standard_overlay(merged: &mut toml::Table, path: &Path) {
    let result = read_table(path).and_then(|overlay| {
        let mut candidate = merged.clone();
        merge_tables(&mut candidate, overlay);
        Settings::from_table(candidate.clone())?;
        Ok(candidate)
    });

    match result {
        Ok(candidate) => {
            tracing::debug!(path = %path.display(), "loaded config overrides");
            *merged = candidate;
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to load config, skipping");
        }
    }
}

fn read_table(path: &Path) -> Result<toml::Table, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Recursively merges `overlay` into `base`; overlay values win.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
