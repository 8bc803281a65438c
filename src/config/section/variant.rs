//! `[[variants]]` section configuration.
//!
//! A variant is a named build configuration with its own asset roots and
//! its own generated-output location. Projects without build flavors keep
//! the single default `main` variant.
//!
//! # Example
//!
//! ```toml
//! [[variants]]
//! name = "main"
//! assets = ["assets"]
//!
//! [[variants]]
//! name = "premium"
//! assets = ["assets", "premium/assets"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::types::{ConfigDiagnostics, FieldPath};

/// One named variant and its asset root directories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantConfig {
    /// Variant name, used as the output subdirectory.
    pub name: String,

    /// Asset root directories, relative to the project root.
    /// Declared order is preserved during enumeration.
    pub assets: Vec<PathBuf>,
}

impl VariantConfig {
    /// Default variant list: a single `main` variant rooted at `assets/`.
    pub fn default_list() -> Vec<Self> {
        vec![Self {
            name: "main".to_string(),
            assets: vec!["assets".into()],
        }]
    }

    /// Validate one variant entry.
    ///
    /// The name becomes a directory component, so it is restricted to
    /// `[A-Za-z0-9_-]`. Asset root paths must be relative (they are
    /// resolved against the project root).
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.is_empty()
            || !self
                .name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            diag.error(
                FieldPath::new("variants.name"),
                format!(
                    "variant name `{}` must be non-empty and contain only [A-Za-z0-9_-]",
                    self.name
                ),
            );
        }

        if self.assets.is_empty() {
            diag.error(
                FieldPath::new("variants.assets"),
                format!("variant `{}` declares no asset root directories", self.name),
            );
        }

        for dir in &self.assets {
            if dir.is_absolute() {
                diag.error(
                    FieldPath::new("variants.assets"),
                    format!(
                        "asset root `{}` must be relative to the project root",
                        dir.display()
                    ),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_variants_default_to_main() {
        let config = test_parse_config("");
        assert_eq!(config.variants.len(), 1);
        assert_eq!(config.variants[0].name, "main");
        assert_eq!(config.variants[0].assets, vec![PathBuf::from("assets")]);
    }

    #[test]
    fn test_variants_parse() {
        let config = test_parse_config(
            "[[variants]]\nname = \"debug\"\nassets = [\"assets\", \"debug/assets\"]",
        );
        assert_eq!(config.variants.len(), 1);
        assert_eq!(config.variants[0].name, "debug");
        assert_eq!(config.variants[0].assets.len(), 2);
    }

    #[test]
    fn test_variant_name_validation() {
        let variant = VariantConfig {
            name: "has space".to_string(),
            assets: vec!["assets".into()],
        };
        let mut diag = ConfigDiagnostics::new();
        variant.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_variant_rejects_absolute_asset_root() {
        let variant = VariantConfig {
            name: "main".to_string(),
            assets: vec!["/abs/assets".into()],
        };
        let mut diag = ConfigDiagnostics::new();
        variant.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_variant_requires_asset_roots() {
        let variant = VariantConfig {
            name: "main".to_string(),
            assets: vec![],
        };
        let mut diag = ConfigDiagnostics::new();
        variant.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
