//! The init command: write a commented `assetgen.toml` template.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::log;

/// Default config filename
const CONFIG_FILE: &str = "assetgen.toml";

const TEMPLATE_BODY: &str = r#"
# Generated sources land under <dir>/<variant>/{java,kotlin,res}.
[output]
dir = "generated"

# One entry per build variant; paths are relative to this file.
[[variants]]
name = "main"
assets = ["assets"]

# Android string resources: res/values/assets-strings.xml
[xml]
enabled = false
string_name_prefix = ""

# Java constants class
[java]
enabled = false
class_name = "AssetFiles"
package_name = "com.github.utilx"
const_name_prefix = "asset_"
const_value_prefix = ""
replace_in_assets_path = []

# Kotlin constants object (auto-enabled when nothing else is)
[kotlin]
enabled = true
class_name = "AssetFiles"
package_name = "com.github.utilx"
const_name_prefix = "asset_"
const_value_prefix = ""
# Rules rewrite asset paths before they become constants, in order:
# replace_in_assets_path = [{ match = "^sounds/", replaceWith = "audio/" }]
replace_in_assets_path = []
"#;

/// Generate assetgen.toml content with comments
fn generate_config_template() -> String {
    format!(
        "# assetgen configuration file (v{})\n{}",
        env!("CARGO_PKG_VERSION"),
        TEMPLATE_BODY
    )
}

/// Write the template into `dir` (or cwd), refusing to overwrite.
pub fn run_init(dir: Option<&Path>) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let target_dir = match dir {
        Some(dir) => cwd.join(dir),
        None => cwd,
    };

    fs::create_dir_all(&target_dir)
        .with_context(|| format!("Failed to create {}", target_dir.display()))?;

    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        bail!("{} already exists", config_path.display());
    }

    fs::write(&config_path, generate_config_template())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    log!("init"; "created {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_cleanly() {
        // The shipped template must never trip the unknown-field warning.
        let config = crate::config::test_parse_config(&generate_config_template());
        assert!(config.kotlin.enabled);
        assert_eq!(config.variants.len(), 1);
    }

    #[test]
    fn test_init_writes_config() {
        let dir = TempDir::new().unwrap();

        run_init(Some(dir.path())).unwrap();

        let written = std::fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        assert!(written.contains("[output]"));
        assert!(written.contains("[[variants]]"));
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "existing").unwrap();

        let err = run_init(Some(dir.path())).unwrap_err();

        assert!(err.to_string().contains("already exists"));
        assert_eq!(
            std::fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap(),
            "existing"
        );
    }
}
