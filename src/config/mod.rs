//! Front-end configuration
//!
//! Settings come from CLI flags, an optional config file, and defaults, with
//! precedence CLI > File > Defaults. The path conversion itself takes no
//! configuration.

use clap::ValueEnum;
use serde::Deserialize;

pub mod loader;

pub use loader::load_config;

/// How converted paths are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One converted path per line
    #[default]
    Plain,
    /// One JSON object per line with input, output and style
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub format: OutputFormat,
    /// Drop empty input lines instead of echoing them back
    pub skip_empty: bool,
}

impl Config {
    /// Apply CLI flags on top of file/default settings.
    pub fn with_overrides(mut self, format: Option<OutputFormat>, skip_empty: bool) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        if skip_empty {
            self.skip_empty = true;
        }
        self
    }
}
