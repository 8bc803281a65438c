//! Output artifact rendering.
//!
//! Three independent emitters consume an ordered, deduplicated pair list
//! and render one artifact each:
//!
//! - [`xml`]: Android string-resource file (`res/values/assets-strings.xml`)
//! - [`java`]: `public final` class of `public static final String` fields
//! - [`kotlin`]: `object` of `const val` properties
//!
//! Every emitter renders a complete in-memory string first and writes it in
//! a single call. An I/O failure can abort a target, but never leaves a
//! truncated artifact behind from partial streaming.

pub mod java;
pub mod kotlin;
pub mod xml;

pub use java::JavaEmitter;
pub use kotlin::KotlinEmitter;
pub use xml::XmlEmitter;

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Header lines carried by every generated file.
const GENERATED_NOTICE_LINES: [&str; 2] = [
    "This file is generated by assetgen.",
    "Do not modify it because all changes will be overwritten.",
];

/// Write a fully rendered artifact, creating parent directories as needed.
pub(crate) fn write_artifact(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write generated file {}", path.display()))
}

/// Escape a value for use inside a Java/Kotlin string literal.
///
/// `escape_dollar` is the Kotlin case: `$` starts a template expression
/// there and must be escaped.
pub(crate) fn escape_code_string(value: &str, escape_dollar: bool) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '$' if escape_dollar => out.push_str("\\$"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the shared doc-comment header.
pub(crate) fn doc_comment_header() -> String {
    let mut out = String::from("/**\n");
    for line in GENERATED_NOTICE_LINES {
        out.push_str(" * ");
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(" */\n");
    out
}

/// The generated-file notice as a single line (XML comment body).
pub(crate) fn notice_line() -> String {
    GENERATED_NOTICE_LINES.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_escape_code_string_plain() {
        assert_eq!(escape_code_string("audio/ping.ogg", false), "audio/ping.ogg");
    }

    #[test]
    fn test_escape_code_string_specials() {
        assert_eq!(escape_code_string(r#"a"b"#, false), r#"a\"b"#);
        assert_eq!(escape_code_string(r"a\b", false), r"a\\b");
        assert_eq!(escape_code_string("a\nb", false), r"a\nb");
    }

    #[test]
    fn test_escape_code_string_dollar() {
        assert_eq!(escape_code_string("a$b", false), "a$b");
        assert_eq!(escape_code_string("a$b", true), r"a\$b");
    }

    #[test]
    fn test_write_artifact_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deep/nested/out.txt");

        write_artifact(&path, "content").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "content");
    }

    #[test]
    fn test_write_artifact_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        write_artifact(&path, "first").unwrap();
        write_artifact(&path, "second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_doc_comment_header_shape() {
        let header = doc_comment_header();
        assert!(header.starts_with("/**\n"));
        assert!(header.ends_with(" */\n"));
        assert!(header.contains("generated by assetgen"));
    }
}
