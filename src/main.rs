//! wslpath-norm: convert WSL /mnt/<drive>/ paths into Windows drive-letter paths

use anyhow::Result;

fn main() -> Result<()> {
    wslpath_norm::cli::run()
}
