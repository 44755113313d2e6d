//! WSL mount path to Windows drive-letter path conversion
//!
//! The conversion is a pure string rewrite: nothing here touches the
//! filesystem or looks at the host platform, so a path converts the same way
//! on Linux, Windows, or macOS.

pub mod mount;
pub mod style;

pub use mount::{is_mount_path, MountPath};
pub use style::PathStyle;

/// Convert a `/mnt/<drive>/...` path into its `<DRIVE>:\...` form.
///
/// Only a single lowercase ASCII drive letter is recognised. Anything else
/// (Windows paths, plain Linux paths, `/mnt/C/`, `/mnt/cd/`, the empty string)
/// is returned unchanged.
///
/// ```
/// use wslpath_norm::normalize_path;
///
/// assert_eq!(normalize_path("/mnt/d/project/file.txt"), r"D:\project\file.txt");
/// assert_eq!(normalize_path("/home/haku/file.txt"), "/home/haku/file.txt");
/// ```
pub fn normalize_path(path: &str) -> String {
    match MountPath::parse(path) {
        Some(mount) => mount.to_windows(),
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_drive_conversion() {
        assert_eq!(normalize_path("/mnt/c/Users/haku/file.txt"), r"C:\Users\haku\file.txt");
    }

    #[test]
    fn test_other_drive_conversion() {
        assert_eq!(normalize_path("/mnt/d/project/file.txt"), r"D:\project\file.txt");
        assert_eq!(normalize_path("/mnt/z/a/b/c"), r"Z:\a\b\c");
    }

    #[test]
    fn test_windows_path_unchanged() {
        let windows_path = r"C:\Users\haku\file.txt";
        assert_eq!(normalize_path(windows_path), windows_path);
    }

    #[test]
    fn test_linux_path_unchanged() {
        assert_eq!(normalize_path("/home/haku/file.txt"), "/home/haku/file.txt");
    }

    #[test]
    fn test_two_letter_segment_unchanged() {
        assert_eq!(normalize_path("/mnt/cd/file.txt"), "/mnt/cd/file.txt");
    }

    #[test]
    fn test_drive_root_keeps_separator() {
        // Six characters are stripped, leaving "/" as the remainder.
        assert_eq!(normalize_path("/mnt/c/"), r"C:\");
        assert_eq!(normalize_path("/mnt/e/"), r"E:\");
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        assert_eq!(normalize_path("/MNT/c/Users"), "/MNT/c/Users");
        assert_eq!(normalize_path("/Mnt/c/Users"), "/Mnt/c/Users");
        assert_eq!(normalize_path("/mnt/C/Users"), "/mnt/C/Users");
    }

    #[test]
    fn test_incomplete_prefixes_unchanged() {
        let inputs = ["", "/", "/mnt", "/mnt/", "/mnt/c", "/mnt/d", "mnt/c/x", "./mnt/c/x", " /mnt/c/x"];
        for input in inputs {
            assert_eq!(normalize_path(input), input, "input {input:?}");
        }
    }

    #[test]
    fn test_non_letter_drive_unchanged() {
        for input in ["/mnt/1/x", "/mnt/_/x", "/mnt/-/x", "/mnt/é/x", "/mnt//x"] {
            assert_eq!(normalize_path(input), input, "input {input:?}");
        }
    }

    #[test]
    fn test_existing_backslashes_in_remainder_preserved() {
        assert_eq!(normalize_path(r"/mnt/c/a\b/c"), r"C:\a\b\c");
    }

    #[test]
    fn test_non_ascii_remainder() {
        assert_eq!(normalize_path("/mnt/d/Документы/файл.txt"), r"D:\Документы\файл.txt");
        assert_eq!(normalize_path("/mnt/c/ユーザー/写真"), r"C:\ユーザー\写真");
    }

    #[test]
    fn test_every_drive_letter() {
        for letter in 'a'..='z' {
            let remainder = "dir/sub dir/file.txt";
            let input = format!("/mnt/{letter}/{remainder}");
            let expected =
                format!("{}:\\{}", letter.to_ascii_uppercase(), remainder.replace('/', "\\"));
            assert_eq!(normalize_path(&input), expected, "drive {letter}");
        }
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "/mnt/c/",
            "/mnt/c/Users/haku/file.txt",
            "/mnt/q/x/y",
            "/mnt/cd/file.txt",
            r"C:\Users\haku\file.txt",
            "/home/haku/file.txt",
            "relative/path",
        ];
        for sample in samples {
            let once = normalize_path(sample);
            assert_eq!(normalize_path(&once), once, "sample {sample:?}");
        }
    }
}
