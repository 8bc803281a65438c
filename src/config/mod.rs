//! Generator configuration management for `assetgen.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── output     # [output]
//! │   ├── variant    # [[variants]]
//! │   ├── xml        # [xml]
//! │   ├── source     # [java] and [kotlin]
//! │   └── rules      # replacement rule wire format
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! └── mod.rs         # GeneratorConfig (this file)
//! ```
//!
//! Loading is a fixed sequence: resolve the config file (upward search from
//! cwd), parse with unknown-key detection, validate raw paths, normalize
//! everything against the project root, apply CLI overrides, then run full
//! validation with batched diagnostics.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    OutputConfig, ReplacementRule, SourceFileConfig, VariantConfig, XmlFileConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands},
    log,
    utils::path::normalize_path,
};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing assetgen.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// CLI arguments reference (internal use only)
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Restrict commands to one variant (CLI only)
    #[serde(skip)]
    pub only_variant: Option<String>,

    /// Generated-output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Variant list; defaults to a single `main` variant
    #[serde(default = "VariantConfig::default_list")]
    pub variants: Vec<VariantConfig>,

    /// Android string-resource XML target
    #[serde(default)]
    pub xml: XmlFileConfig,

    /// Java constants-class target
    #[serde(default)]
    pub java: SourceFileConfig,

    /// Kotlin constants-object target
    #[serde(default)]
    pub kotlin: SourceFileConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            cli: None,
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            only_variant: None,
            output: OutputConfig::default(),
            variants: VariantConfig::default_list(),
            xml: XmlFileConfig::default(),
            java: SourceFileConfig::default(),
            kotlin: SourceFileConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file; the project root is
    /// the config file's parent directory.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        if !exists {
            log!(
                "error";
                "Config file '{}' not found. Run 'assetgen init' to create a new project.",
                cli.config.display()
            );
            std::process::exit(1);
        }

        let mut config = Self::from_path(&config_path)?;

        // Validate raw paths and variant declarations before normalization
        // turns every path absolute
        config.validate_declarations()?;

        config.config_path = config_path;
        config.cli = Some(cli);
        config.finalize(cli);

        // Full validation against the normalized view
        config.validate()?;

        Ok(config)
    }

    /// Resolve config file path by searching upward from cwd.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        match find_config_file(&cli.config) {
            Some(path) => Ok((path, true)),
            None => {
                let cwd = std::env::current_dir()
                    .map_err(|err| ConfigError::Io(cli.config.clone(), err))?;
                Ok((cwd.join(&cli.config), false))
            }
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        // Warn and continue: this tool runs inside builds, where an
        // interactive confirmation would hang CI
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // finalization
    // ========================================================================

    /// Finalize configuration after loading: resolve the project root,
    /// apply CLI overrides, normalize paths, apply the default-target
    /// policy.
    fn finalize(&mut self, cli: &Cli) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let root = normalize_path(&root);

        self.apply_command_options(cli);

        self.config_path = normalize_path(&self.config_path);
        self.output.dir = normalize_path(&root.join(&self.output.dir));
        for variant in &mut self.variants {
            variant.assets = variant
                .assets
                .iter()
                .map(|dir| normalize_path(&root.join(dir)))
                .collect();
        }
        self.root = root;

        self.apply_default_target();
    }

    /// Ensure at least one target is enabled: generation must never be a
    /// silent no-op, so the kotlin target is switched on with a warning.
    fn apply_default_target(&mut self) {
        if !self.xml.enabled && !self.java.enabled && !self.kotlin.enabled {
            log!("warning"; "no file type enabled, enabling kotlin file generation");
            self.kotlin.enabled = true;
        }
    }

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Generate { args } => {
                Self::update_option(&mut self.output.dir, args.output.as_ref());
                self.only_variant = args.variant.clone();
            }
            Commands::List { args } => {
                self.only_variant = args.variant.clone();
            }
            Commands::Check | Commands::Init { .. } => {}
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Pre-validate variant declarations before path normalization.
    ///
    /// Must run before `finalize()`: normalization turns relative paths
    /// absolute, which would hide user-specified absolute asset roots.
    fn validate_declarations(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        for variant in &self.variants {
            variant.validate(&mut diag);
        }

        let mut names: Vec<&str> = self.variants.iter().map(|v| v.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        if names.len() != self.variants.len() {
            diag.error(
                FieldPath::new("variants.name"),
                "variant names must be unique",
            );
        }

        if self.output.dir.is_absolute() {
            diag.error(
                FieldPath::new("output.dir"),
                format!(
                    "`{}` must be relative to the project root",
                    self.output.dir.display()
                ),
            );
        }

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Validate the normalized configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.xml.validate(&mut diag);
        self.java.validate(
            FieldPath::new("java.class_name"),
            FieldPath::new("java.package_name"),
            FieldPath::new("java.replace_in_assets_path"),
            &mut diag,
        );
        self.kotlin.validate(
            FieldPath::new("kotlin.class_name"),
            FieldPath::new("kotlin.package_name"),
            FieldPath::new("kotlin.replace_in_assets_path"),
            &mut diag,
        );

        // Missing roots are a hint, not an error: a variant may own no
        // assets yet
        for variant in &self.variants {
            for dir in &variant.assets {
                if !dir.exists() {
                    diag.hint(
                        FieldPath::new("variants.assets"),
                        format!(
                            "asset root '{}' of variant `{}` not found",
                            self.root_relative(dir).display(),
                            variant.name
                        ),
                    );
                }
            }
        }

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    // ========================================================================
    // accessors
    // ========================================================================

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Get path relative to the project root
    pub fn root_relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }

    /// Variants selected by `--variant`, or all of them.
    ///
    /// Fails when `--variant` names a variant the config does not declare.
    pub fn active_variants(&self) -> Result<Vec<&VariantConfig>> {
        match self.only_variant.as_deref() {
            None => Ok(self.variants.iter().collect()),
            Some(name) => {
                let selected: Vec<_> = self
                    .variants
                    .iter()
                    .filter(|v| v.name == name)
                    .collect();
                if selected.is_empty() {
                    anyhow::bail!(
                        "unknown variant `{}` (declared: {})",
                        name,
                        self.variants
                            .iter()
                            .map(|v| v.name.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    );
                }
                Ok(selected)
            }
        }
    }

    /// Output directory for one variant's generated artifacts.
    pub fn variant_output_dir(&self, variant_name: &str) -> PathBuf {
        self.output.dir.join(variant_name)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from a TOML snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> GeneratorConfig {
    let (parsed, ignored) = GeneratorConfig::parse_with_ignored(extra).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
