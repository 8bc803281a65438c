//! Android string-resource XML emitter.
//!
//! Renders one `<resources>` document with a `<string>` entry per asset:
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <!--This file is generated by assetgen. …-->
//! <resources>
//!     <string name="asset_logo_png_1234">logo.png</string>
//! </resources>
//! ```
//!
//! Resource names use a stricter sanitizer than the code emitters: `$` is
//! legal in Java/Kotlin identifiers but not in resource names, so the
//! disallowed-character pattern here is `[^A-Za-z0-9]`. Names keep their
//! case (resource names are conventionally lower-case, and upper-casing is
//! a code-constant convention). Values are the raw relative paths, escaped
//! by the XML writer.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use super::{notice_line, write_artifact};
use crate::config::XmlFileConfig;
use crate::constants::{ConstNameValuePair, NameCollision, dedupe_pairs};
use crate::transform::{Replacement, StringTransformer};
use crate::utils::hash;

const RESOURCES_TAG: &str = "resources";
const STRING_TAG: &str = "string";
const NAME_ATTRIBUTE: &str = "name";

/// Characters not allowed in string-resource names (stricter than code
/// constants: no `$`).
const NOT_ALLOWED_STRING_NAME_CHAR_PATTERN: &str = "[^A-Za-z0-9]";

/// Fixed output file name under `<variant>/res/values/`.
pub const XML_RESOURCE_FILE_NAME: &str = "assets-strings.xml";

pub struct XmlEmitter<'a> {
    config: &'a XmlFileConfig,
    sanitizer: StringTransformer,
}

impl<'a> XmlEmitter<'a> {
    pub fn new(config: &'a XmlFileConfig) -> Self {
        let rule = Replacement::compile(NOT_ALLOWED_STRING_NAME_CHAR_PATTERN, "_")
            .unwrap_or_else(|_| unreachable!("fixed resource-name pattern is valid"));
        Self {
            config,
            sanitizer: StringTransformer::new(vec![rule], ""),
        }
    }

    /// Resource name for one asset path: sanitized path plus the hash
    /// suffix of the raw path, behind the configured prefix.
    fn string_name(&self, path: &str) -> String {
        format!(
            "{}{}_{}",
            self.config.string_name_prefix,
            self.sanitizer.apply(path),
            hash::compute(path)
        )
    }

    /// Build the deduplicated pair list for this target.
    ///
    /// The XML target carries no value transformer: values are the raw
    /// enumerated paths.
    pub fn derive_pairs(
        &self,
        paths: &[String],
    ) -> Result<Vec<ConstNameValuePair>, NameCollision> {
        dedupe_pairs(paths.iter().map(|path| ConstNameValuePair {
            name: self.string_name(path),
            value: path.clone(),
        }))
    }

    /// Render the complete document.
    pub fn render(&self, pairs: &[ConstNameValuePair]) -> Result<String> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 4);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        writer.write_event(Event::Comment(BytesText::new(&notice_line())))?;
        writer.write_event(Event::Start(BytesStart::new(RESOURCES_TAG)))?;

        for pair in pairs {
            let mut element = BytesStart::new(STRING_TAG);
            element.push_attribute((NAME_ATTRIBUTE, pair.name.as_str()));
            writer.write_event(Event::Start(element))?;
            writer.write_event(Event::Text(BytesText::new(&pair.value)))?;
            writer.write_event(Event::End(BytesEnd::new(STRING_TAG)))?;
        }

        writer.write_event(Event::End(BytesEnd::new(RESOURCES_TAG)))?;

        let mut rendered = String::from_utf8(writer.into_inner().into_inner())
            .context("generated XML is not valid UTF-8")?;
        rendered.push('\n');
        Ok(rendered)
    }

    /// Output file path under a variant's output directory:
    /// `<variant_dir>/res/values/assets-strings.xml`.
    pub fn output_file(&self, variant_dir: &Path) -> PathBuf {
        variant_dir
            .join("res")
            .join("values")
            .join(XML_RESOURCE_FILE_NAME)
    }

    /// Render and write, returning the written path.
    pub fn write(&self, pairs: &[ConstNameValuePair], variant_dir: &Path) -> Result<PathBuf> {
        let file = self.output_file(variant_dir);
        write_artifact(&file, &self.render(pairs)?)?;
        Ok(file)
    }
}
