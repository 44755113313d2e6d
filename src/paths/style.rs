//! Coarse classification of path strings for reporting

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::mount::is_mount_path;

static DRIVE_LETTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]:(?:[\\/]|$)").expect("valid drive letter regex"));

/// Which convention a path string is written in.
///
/// Classification is informational only and never changes how a path is
/// normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
    /// `/mnt/<a-z>/...`, convertible to a drive-letter path
    Mount,
    /// `X:`, `X:\...` or `X:/...`
    Windows,
    Other,
}

impl PathStyle {
    pub fn detect(path: &str) -> Self {
        if is_mount_path(path) {
            PathStyle::Mount
        } else if DRIVE_LETTER_RE.is_match(path) {
            PathStyle::Windows
        } else {
            PathStyle::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PathStyle::Mount => "mount",
            PathStyle::Windows => "windows",
            PathStyle::Other => "other",
        }
    }
}

impl std::fmt::Display for PathStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
