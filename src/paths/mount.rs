//! Parsing of `/mnt/<drive>/` mount paths

use once_cell::sync::Lazy;
use regex::Regex;

/// Literal prefix for the system drive, checked before the general pattern.
const C_DRIVE_PREFIX: &str = "/mnt/c/";

/// `/mnt/` plus the drive letter. The separator after the letter stays in the remainder.
const MOUNT_PREFIX_LEN: usize = 6;

static MOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/mnt/([a-z])/").expect("valid mount path regex"));

/// A path under a WSL drive mount, borrowed from the original string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountPath<'a> {
    drive: char,
    remainder: &'a str,
}

impl<'a> MountPath<'a> {
    /// Recognise `/mnt/<a-z>/...`. Returns `None` for every other shape.
    pub fn parse(path: &'a str) -> Option<Self> {
        if path.starts_with(C_DRIVE_PREFIX) {
            return Some(Self { drive: 'c', remainder: &path[MOUNT_PREFIX_LEN..] });
        }

        let caps = MOUNT_RE.captures(path)?;
        let drive = caps.get(1)?.as_str().chars().next()?;
        // The matched prefix is pure ASCII, so the byte offset is a char boundary.
        Some(Self { drive, remainder: &path[MOUNT_PREFIX_LEN..] })
    }

    /// Drive letter as written in the mount path (always lowercase).
    pub fn drive(&self) -> char {
        self.drive
    }

    /// Drive letter as Windows spells it.
    pub fn drive_letter(&self) -> char {
        self.drive.to_ascii_uppercase()
    }

    /// Everything after `/mnt/<drive>`, starting with the `/` separator.
    pub fn remainder(&self) -> &'a str {
        self.remainder
    }

    /// Render as `<DRIVE>:` followed by the remainder with `\` separators.
    pub fn to_windows(&self) -> String {
        let mut out = String::with_capacity(self.remainder.len() + 2);
        out.push(self.drive_letter());
        out.push(':');
        out.push_str(&self.remainder.replace('/', "\\"));
        out
    }
}

pub fn is_mount_path(path: &str) -> bool {
    MountPath::parse(path).is_some()
}
