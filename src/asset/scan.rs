//! Asset enumeration (read-only filesystem walk).
//!
//! Produces every file under the configured asset roots as a path relative
//! to its root, with `/` separators on every platform. Listings are sorted
//! per root so generation output never depends on directory-iteration
//! order; roots themselves are visited in declared order.

use std::path::{Path, PathBuf};

use jwalk::{Parallelism, WalkDir};

use crate::debug;
use crate::utils::path::relative_unix_path;

/// List all files under `roots`, relative to their root.
///
/// Missing roots are skipped (the check command reports them; generation
/// treats them as empty). Directories are never listed, only files.
pub fn list_assets(roots: &[PathBuf]) -> Vec<String> {
    let mut results = Vec::new();
    for root in roots {
        if !root.exists() {
            debug!("scan"; "skipping missing asset root {}", root.display());
            continue;
        }
        results.extend(list_root(root));
    }
    results
}

/// List one root's files, sorted.
fn list_root(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(root)
        .parallelism(Parallelism::Serial)
        .skip_hidden(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| relative_unix_path(&entry.path(), root))
        .collect();

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_assets_empty_for_missing_root() {
        let dir = TempDir::new().unwrap();
        let roots = vec![dir.path().join("nonexistent")];
        assert!(list_assets(&roots).is_empty());
    }

    #[test]
    fn test_list_assets_relative_sorted() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("assets");
        fs::create_dir_all(root.join("fonts")).unwrap();
        fs::write(root.join("zebra.txt"), "z").unwrap();
        fs::write(root.join("fonts/mono.ttf"), "m").unwrap();
        fs::write(root.join("alpha.txt"), "a").unwrap();

        let listed = list_assets(&[root]);

        assert_eq!(listed, vec!["alpha.txt", "fonts/mono.ttf", "zebra.txt"]);
    }

    #[test]
    fn test_list_assets_includes_hidden_files() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_path_buf();
        fs::write(root.join(".keep"), "").unwrap();

        let listed = list_assets(&[root]);

        assert_eq!(listed, vec![".keep"]);
    }

    #[test]
    fn test_list_assets_keeps_root_declaration_order() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("one");
        let second = dir.path().join("two");
        fs::create_dir_all(&first).unwrap();
        fs::create_dir_all(&second).unwrap();
        fs::write(first.join("zz.txt"), "").unwrap();
        fs::write(second.join("aa.txt"), "").unwrap();

        let listed = list_assets(&[first, second]);

        // Sorted within a root, declared order across roots.
        assert_eq!(listed, vec!["zz.txt", "aa.txt"]);
    }

    #[test]
    fn test_list_assets_skips_directories() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_path_buf();
        fs::create_dir_all(root.join("empty/nested")).unwrap();
        fs::write(root.join("file.bin"), "x").unwrap();

        let listed = list_assets(&[root]);

        assert_eq!(listed, vec!["file.bin"]);
    }
}
