//! Convert command implementation

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use crate::config::{load_config, Config, OutputFormat};
use crate::paths::{normalize_path, PathStyle};

#[derive(Args)]
pub struct ConvertArgs {
    /// Paths to convert (read from stdin, one per line, when omitted)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Read paths from stdin even when PATH arguments are given
    #[arg(long)]
    pub stdin: bool,

    /// Output format (overrides the config file)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Drop empty input lines instead of echoing them
    #[arg(long)]
    pub skip_empty: bool,

    /// Config file (defaults to wslpath-norm.toml/.yaml in the current directory)
    #[arg(short, long, value_name = "FILE", env = "WSLPATH_NORM_CONFIG")]
    pub config: Option<PathBuf>,
}

/// One line of `--format json` output.
#[derive(Debug, Serialize)]
pub struct ConvertRecord<'a> {
    pub input: &'a str,
    pub output: String,
    pub style: PathStyle,
    pub converted: bool,
}

impl<'a> ConvertRecord<'a> {
    pub fn new(input: &'a str) -> Self {
        let output = normalize_path(input);
        Self { input, converted: output != input, style: PathStyle::detect(input), output }
    }
}

pub fn run(args: ConvertArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let config = load_config(&cwd, args.config.as_deref())?
        .with_overrides(args.format, args.skip_empty);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for path in &args.paths {
        write_converted(&mut out, path, &config)?;
    }

    if args.stdin || args.paths.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.context("Failed reading paths from stdin")?;
            let path = line.strip_suffix('\r').unwrap_or(&line);
            write_converted(&mut out, path, &config)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn write_converted<W: Write>(out: &mut W, path: &str, config: &Config) -> Result<()> {
    if config.skip_empty && path.is_empty() {
        return Ok(());
    }

    let record = ConvertRecord::new(path);
    tracing::debug!(input = path, output = %record.output, style = %record.style, "converted");

    match config.format {
        OutputFormat::Plain => writeln!(out, "{}", record.output)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&record)?)?,
    }
    Ok(())
}
