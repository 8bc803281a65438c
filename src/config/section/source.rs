//! `[java]` and `[kotlin]` section configuration.
//!
//! Both code targets share one shape; they differ only in the emitted
//! language and output subdirectory.
//!
//! # Example
//!
//! ```toml
//! [kotlin]
//! enabled = true
//! class_name = "AssetFiles"
//! package_name = "com.example.app"
//! const_name_prefix = "asset_"
//! const_value_prefix = ""
//! replace_in_assets_path = [{ match = "^sounds/", replaceWith = "audio/" }]
//! ```

use serde::{Deserialize, Serialize};

use super::rules::ReplacementRule;
use crate::config::types::{ConfigDiagnostics, FieldPath};
use crate::transform::StringTransformer;

/// Settings shared by the Java and Kotlin file targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceFileConfig {
    /// Generate this target at all.
    pub enabled: bool,

    /// Name of the generated class/object.
    pub class_name: String,

    /// Package of the generated file; empty for the default package.
    pub package_name: String,

    /// Prepended to every constant name (before upper-casing).
    pub const_name_prefix: String,

    /// Prepended to every constant value.
    pub const_value_prefix: String,

    /// Ordered rewrite rules applied to each asset path before it becomes
    /// a constant value (and, transitively, a constant name).
    pub replace_in_assets_path: Vec<ReplacementRule>,
}

impl Default for SourceFileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            class_name: "AssetFiles".to_string(),
            package_name: "com.github.utilx".to_string(),
            const_name_prefix: "asset_".to_string(),
            const_value_prefix: String::new(),
            replace_in_assets_path: Vec::new(),
        }
    }
}

impl SourceFileConfig {
    /// Validate an enabled code target.
    ///
    /// `section` is `"java"` or `"kotlin"`; `class_field`/`package_field`/
    /// `rules_field` are the static field paths for diagnostics.
    pub fn validate(
        &self,
        class_field: FieldPath,
        package_field: FieldPath,
        rules_field: FieldPath,
        diag: &mut ConfigDiagnostics,
    ) {
        if !self.enabled {
            return;
        }

        if !is_valid_identifier(&self.class_name) {
            diag.error(
                class_field,
                format!("`{}` is not a valid class name", self.class_name),
            );
        }

        if !self.package_name.is_empty()
            && !self.package_name.split('.').all(is_valid_identifier)
        {
            diag.error(
                package_field,
                format!("`{}` is not a valid package name", self.package_name),
            );
        }

        for rule in &self.replace_in_assets_path {
            if let Err(err) = StringTransformer::from_rules(std::slice::from_ref(rule), "") {
                diag.error_with_hint(
                    rules_field,
                    err.to_string(),
                    "patterns use regex syntax; escape literal characters like `.` and `$`",
                );
            }
        }
    }
}

/// Java/Kotlin identifier check (ASCII letters, digits, `_`, `$`; no
/// leading digit).
fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
