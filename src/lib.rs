//! wslpath-norm: convert WSL mount paths into Windows drive-letter paths
//!
//! `/mnt/<drive>/...` becomes `<DRIVE>:\...`; every other string is returned
//! untouched. The conversion is pure and total, so it is safe to call from any
//! thread on any host.

pub mod cli;
pub mod config;
pub mod paths;

pub use paths::{is_mount_path, normalize_path, MountPath, PathStyle};
