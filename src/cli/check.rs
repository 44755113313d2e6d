//! Check command implementation

use anyhow::Result;
use clap::Args;

use crate::paths::PathStyle;

#[derive(Args)]
pub struct CheckArgs {
    /// Paths to classify
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let mut rejected = 0usize;
    for path in &args.paths {
        let style = PathStyle::detect(path);
        if style != PathStyle::Mount {
            rejected += 1;
        }
        println!("{}\t{}", style, path);
    }

    if rejected > 0 {
        anyhow::bail!("{} of {} paths are not WSL mount paths", rejected, args.paths.len());
    }
    Ok(())
}
