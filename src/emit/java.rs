//! Java constants-class emitter.
//!
//! Renders one `public final` class with a `public static final String`
//! field per pair:
//!
//! ```java
//! package com.example.app;
//!
//! /**
//!  * This file is generated by assetgen.
//!  * Do not modify it because all changes will be overwritten.
//!  */
//! public final class AssetFiles {
//!     public static final String ASSET_LOGO_PNG_1234 = "logo.png";
//! }
//! ```

use std::path::{Path, PathBuf};

use anyhow::Result;

use super::{doc_comment_header, escape_code_string, write_artifact};
use crate::config::SourceFileConfig;
use crate::constants::ConstNameValuePair;

pub struct JavaEmitter<'a> {
    config: &'a SourceFileConfig,
}

impl<'a> JavaEmitter<'a> {
    pub fn new(config: &'a SourceFileConfig) -> Self {
        Self { config }
    }

    /// Render the complete source file.
    pub fn render(&self, pairs: &[ConstNameValuePair]) -> String {
        let mut out = String::with_capacity(128 + pairs.len() * 64);

        if !self.config.package_name.is_empty() {
            out.push_str("package ");
            out.push_str(&self.config.package_name);
            out.push_str(";\n\n");
        }

        out.push_str(&doc_comment_header());
        out.push_str("public final class ");
        out.push_str(&self.config.class_name);
        out.push_str(" {\n");

        for pair in pairs {
            out.push_str("    public static final String ");
            out.push_str(&pair.name);
            out.push_str(" = \"");
            out.push_str(&escape_code_string(&pair.value, false));
            out.push_str("\";\n");
        }

        out.push_str("}\n");
        out
    }

    /// Output file path under a variant's output directory:
    /// `<variant_dir>/java/<package-path>/<ClassName>.java`.
    pub fn output_file(&self, variant_dir: &Path) -> PathBuf {
        let mut dir = variant_dir.join("java");
        if !self.config.package_name.is_empty() {
            for segment in self.config.package_name.split('.') {
                dir.push(segment);
            }
        }
        dir.join(format!("{}.java", self.config.class_name))
    }

    /// Render and write, returning the written path.
    pub fn write(&self, pairs: &[ConstNameValuePair], variant_dir: &Path) -> Result<PathBuf> {
        let file = self.output_file(variant_dir);
        write_artifact(&file, &self.render(pairs))?;
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(name: &str, value: &str) -> ConstNameValuePair {
        ConstNameValuePair {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    fn config() -> SourceFileConfig {
        SourceFileConfig {
            enabled: true,
            class_name: "AssetFiles".to_string(),
            package_name: "com.example.app".to_string(),
            ..SourceFileConfig::default()
        }
    }

    #[test]
    fn test_render_class_shape() {
        let config = config();
        let rendered = JavaEmitter::new(&config).render(&[
            pair("ASSET_LOGO_PNG_1", "logo.png"),
            pair("ASSET_FONTS_MONO_TTF_2", "fonts/mono.ttf"),
        ]);

        assert!(rendered.starts_with("package com.example.app;\n"));
        assert!(rendered.contains("public final class AssetFiles {"));
        assert!(
            rendered.contains("    public static final String ASSET_LOGO_PNG_1 = \"logo.png\";")
        );
        assert!(rendered.contains("ASSET_FONTS_MONO_TTF_2 = \"fonts/mono.ttf\";"));
        assert!(rendered.ends_with("}\n"));
    }

    #[test]
    fn test_render_preserves_input_order() {
        let config = config();
        let rendered = JavaEmitter::new(&config).render(&[pair("B_2", "b"), pair("A_1", "a")]);

        let b_pos = rendered.find("B_2").unwrap();
        let a_pos = rendered.find("A_1").unwrap();
        assert!(b_pos < a_pos);
    }

    #[test]
    fn test_render_without_package() {
        let config = SourceFileConfig {
            package_name: String::new(),
            ..config()
        };
        let rendered = JavaEmitter::new(&config).render(&[]);

        assert!(!rendered.contains("package"));
        assert!(rendered.starts_with("/**\n"));
    }

    #[test]
    fn test_render_marks_file_generated() {
        let config = config();
        let rendered = JavaEmitter::new(&config).render(&[]);
        assert!(rendered.contains("generated by assetgen"));
    }

    #[test]
    fn test_render_escapes_values() {
        let config = config();
        let rendered = JavaEmitter::new(&config).render(&[pair("A_1", "dir\\fi\"le.txt")]);
        assert!(rendered.contains(r#"= "dir\\fi\"le.txt";"#));
    }

    #[test]
    fn test_render_is_idempotent() {
        let config = config();
        let emitter = JavaEmitter::new(&config);
        let pairs = [pair("A_1", "a"), pair("B_2", "b")];
        assert_eq!(emitter.render(&pairs), emitter.render(&pairs));
    }

    #[test]
    fn test_output_file_layout() {
        let config = config();
        let file = JavaEmitter::new(&config).output_file(Path::new("/out/main"));
        assert_eq!(
            file,
            PathBuf::from("/out/main/java/com/example/app/AssetFiles.java")
        );
    }

    #[test]
    fn test_output_file_default_package() {
        let config = SourceFileConfig {
            package_name: String::new(),
            ..config()
        };
        let file = JavaEmitter::new(&config).output_file(Path::new("/out/main"));
        assert_eq!(file, PathBuf::from("/out/main/java/AssetFiles.java"));
    }
}
