//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory.
///
/// Returns the absolute path to the config file if found.
///
/// # Example
/// ```text
/// /home/user/app/assets/sounds/   ← cwd
/// /home/user/app/assetgen.toml    ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    // An absolute config path is taken as-is
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(config_name, &cwd)
}

/// Walk up from `start_dir` until `config_name` is found.
fn find_config_file_from(config_name: &Path, start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_finds_config_in_start_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("assetgen.toml"), "").unwrap();

        let found = find_config_file_from(Path::new("assetgen.toml"), dir.path());

        assert_eq!(found, Some(dir.path().join("assetgen.toml")));
    }

    #[test]
    fn test_finds_config_in_ancestor() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("assets/sounds");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("assetgen.toml"), "").unwrap();

        let found = find_config_file_from(Path::new("assetgen.toml"), &nested);

        assert_eq!(found, Some(dir.path().join("assetgen.toml")));
    }

    #[test]
    fn test_missing_config_returns_none() {
        let dir = TempDir::new().unwrap();

        // Note: walks up past the temp dir, so the name must not exist
        // anywhere above either.
        let found = find_config_file_from(Path::new("definitely-not-a-real-config.toml"), dir.path());

        assert_eq!(found, None);
    }
}
