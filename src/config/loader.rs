//! Config file discovery and parsing

use super::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Section name accepted for nesting settings inside a larger document.
const SECTION: &str = "wslpath-norm";

const CANDIDATES: &[&str] = &[
    "wslpath-norm.toml",
    ".wslpath-norm.toml",
    "wslpath-norm.yaml",
    ".wslpath-norm.yaml",
    "wslpath-norm.yml",
    ".wslpath-norm.yml",
];

/// Load settings from `config_path`, or from the first candidate file found in `dir`.
///
/// An explicitly given file must exist and parse. A discovered file that fails
/// to parse is reported with a warning and the defaults are used instead.
pub fn load_config(dir: &Path, config_path: Option<&Path>) -> Result<Config> {
    let explicit = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(dir),
    };

    let Some(config_file) = discovered else {
        tracing::debug!("No config file found in {}", dir.display());
        return Ok(Config::default());
    };

    match read_config(&config_file) {
        Ok(cfg) => {
            tracing::debug!("Loaded config from {}", config_file.display());
            Ok(cfg)
        }
        Err(e) if !explicit => {
            tracing::warn!(
                "Ignoring auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            Ok(Config::default())
        }
        Err(e) => Err(e),
    }
}

fn read_config(config_file: &Path) -> Result<Config> {
    let content = fs::read_to_string(config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    match ext.as_str() {
        "toml" => parse_toml_config(&content, config_file),
        "yaml" | "yml" => parse_yaml_config(&content, config_file),
        other => anyhow::bail!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        ),
    }
}

/// Parse TOML, accepting either top-level keys or a `[wslpath-norm]` table.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML, accepting either top-level keys or a `wslpath-norm:` map.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    // An empty document parses as null; treat it like an empty map.
    if raw.is_null() {
        return Ok(Config::default());
    }

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(dir: &Path) -> Option<PathBuf> {
    CANDIDATES.iter().map(|candidate| dir.join(candidate)).find(|path| path.is_file())
}
