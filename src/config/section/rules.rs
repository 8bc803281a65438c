//! Replacement rule wire format.
//!
//! Rules arrive from `assetgen.toml` as inline tables with exactly two
//! keys, `match` (a regex source) and `replaceWith` (a literal replacement):
//!
//! ```toml
//! replace_in_assets_path = [
//!     { match = "^sounds/", replaceWith = "audio/" },
//!     { match = "\\.webp$", replaceWith = ".img" },
//! ]
//! ```
//!
//! A rule missing either key fails config parsing; pattern validity is
//! checked during config validation, before any generation runs.

use serde::{Deserialize, Serialize};

/// One declarative (pattern, replacement) rule, not yet compiled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementRule {
    /// Regular expression source. Both keys are required.
    #[serde(rename = "match")]
    pub match_pattern: String,

    /// Literal replacement text (no capture-group expansion).
    #[serde(rename = "replaceWith")]
    pub replace_with: String,
}

impl ReplacementRule {
    pub fn new(match_pattern: impl Into<String>, replace_with: impl Into<String>) -> Self {
        Self {
            match_pattern: match_pattern.into(),
            replace_with: replace_with.into(),
        }
    }
}
