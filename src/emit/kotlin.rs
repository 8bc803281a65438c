//! Kotlin constants-object emitter.
//!
//! Renders one top-level `object` with a `const val` per pair:
//!
//! ```kotlin
//! package com.example.app
//!
//! /**
//!  * This file is generated by assetgen.
//!  * Do not modify it because all changes will be overwritten.
//!  */
//! object AssetFiles {
//!     const val ASSET_LOGO_PNG_1234: String = "logo.png"
//! }
//! ```

use std::path::{Path, PathBuf};

use anyhow::Result;

use super::{doc_comment_header, escape_code_string, write_artifact};
use crate::config::SourceFileConfig;
use crate::constants::ConstNameValuePair;

pub struct KotlinEmitter<'a> {
    config: &'a SourceFileConfig,
}

impl<'a> KotlinEmitter<'a> {
    pub fn new(config: &'a SourceFileConfig) -> Self {
        Self { config }
    }

    /// Render the complete source file.
    pub fn render(&self, pairs: &[ConstNameValuePair]) -> String {
        let mut out = String::with_capacity(128 + pairs.len() * 64);

        if !self.config.package_name.is_empty() {
            out.push_str("package ");
            out.push_str(&self.config.package_name);
            out.push_str("\n\n");
        }

        out.push_str(&doc_comment_header());
        out.push_str("object ");
        out.push_str(&self.config.class_name);
        out.push_str(" {\n");

        for pair in pairs {
            out.push_str("    const val ");
            out.push_str(&pair.name);
            out.push_str(": String = \"");
            // Kotlin strings are templates: escape `$` on top of the usual set
            out.push_str(&escape_code_string(&pair.value, true));
            out.push_str("\"\n");
        }

        out.push_str("}\n");
        out
    }

    /// Output file path under a variant's output directory:
    /// `<variant_dir>/kotlin/<package-path>/<ClassName>.kt`.
    pub fn output_file(&self, variant_dir: &Path) -> PathBuf {
        let mut dir = variant_dir.join("kotlin");
        if !self.config.package_name.is_empty() {
            for segment in self.config.package_name.split('.') {
                dir.push(segment);
            }
        }
        dir.join(format!("{}.kt", self.config.class_name))
    }

    /// Render and write, returning the written path.
    pub fn write(&self, pairs: &[ConstNameValuePair], variant_dir: &Path) -> Result<PathBuf> {
        let file = self.output_file(variant_dir);
        write_artifact(&file, &self.render(pairs))?;
        Ok(file)
    }
}
