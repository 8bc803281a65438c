//! `[output]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [output]
//! dir = "generated"    # root for generated sources (relative to project root)
//! ```
//!
//! Per-variant artifacts land under `<dir>/<variant>/{java,kotlin,res}`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Generated output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Root directory for all generated artifacts.
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: "generated".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;
    use std::path::PathBuf;

    #[test]
    fn test_output_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.output.dir, PathBuf::from("generated"));
    }

    #[test]
    fn test_output_custom_dir() {
        let config = test_parse_config("[output]\ndir = \"build/constants\"");
        assert_eq!(config.output.dir, PathBuf::from("build/constants"));
    }
}
