//! Path normalization utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `relative_unix_path` - root-relative paths with `/` separators

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
///
/// # Example
/// ```ignore
/// use crate::utils::path::normalize_path;
/// let abs = normalize_path(Path::new("./assets"));
/// ```
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Render a path relative to `root` using `/` separators on every platform.
///
/// Generated constants embed these strings, so the separator must not depend
/// on the host OS. Returns `None` if `path` is not under `root`.
pub fn relative_unix_path(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_absolute() {
        let path = Path::new("/absolute/path/file.txt");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_normalize_path_relative() {
        let path = Path::new("relative/path/file.txt");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_relative_unix_path() {
        let root = Path::new("/data/assets");
        let path = Path::new("/data/assets/fonts/mono.ttf");
        assert_eq!(
            relative_unix_path(path, root),
            Some("fonts/mono.ttf".to_string())
        );
    }

    #[test]
    fn test_relative_unix_path_outside_root() {
        let root = Path::new("/data/assets");
        let path = Path::new("/elsewhere/file.txt");
        assert_eq!(relative_unix_path(path, root), None);
    }
}
