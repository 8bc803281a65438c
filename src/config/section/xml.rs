//! `[xml]` section configuration.
//!
//! The XML target renders an Android string-resource file. Resource names
//! are derived with a stricter character set than code constants (`$` is
//! not legal in resource names), and values are the raw asset paths; the
//! XML target carries no replacement rules.
//!
//! # Example
//!
//! ```toml
//! [xml]
//! enabled = true
//! string_name_prefix = "asset_"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::types::{ConfigDiagnostics, FieldPath};

/// String-resource XML target settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct XmlFileConfig {
    /// Generate this target at all.
    pub enabled: bool,

    /// Prepended to every `<string name="…">` attribute.
    pub string_name_prefix: String,
}

impl XmlFileConfig {
    /// Validate an enabled XML target.
    ///
    /// The prefix lands verbatim in the `name` attribute, so it is held to
    /// the same character set the sanitizer enforces.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enabled {
            return;
        }

        if !self
            .string_name_prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            diag.error(
                FieldPath::new("xml.string_name_prefix"),
                format!(
                    "`{}` may contain only [A-Za-z0-9_]",
                    self.string_name_prefix
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_xml_defaults() {
        let config = test_parse_config("");
        assert!(!config.xml.enabled);
        assert_eq!(config.xml.string_name_prefix, "");
    }

    #[test]
    fn test_xml_section_parse() {
        let config = test_parse_config("[xml]\nenabled = true\nstring_name_prefix = \"asset_\"");
        assert!(config.xml.enabled);
        assert_eq!(config.xml.string_name_prefix, "asset_");
    }

    #[test]
    fn test_xml_prefix_validation() {
        let xml = XmlFileConfig {
            enabled: true,
            string_name_prefix: "has space".to_string(),
        };
        let mut diag = ConfigDiagnostics::new();
        xml.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_xml_prefix_validation_skipped_when_disabled() {
        let xml = XmlFileConfig {
            enabled: false,
            string_name_prefix: "bad prefix!".to_string(),
        };
        let mut diag = ConfigDiagnostics::new();
        xml.validate(&mut diag);
        assert!(!diag.has_errors());
    }
}
