//! The generate command: enumerate, derive, render, write.
//!
//! One synchronous pass per (variant, enabled target). Targets fail
//! independently: a broken target is logged and the rest still generate,
//! but the command exits nonzero if anything failed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::asset::scan;
use crate::config::{GeneratorConfig, SourceFileConfig, XmlFileConfig};
use crate::constants::{self, ConstNameValuePair, FileConstantsFactory};
use crate::emit::{JavaEmitter, KotlinEmitter, XmlEmitter};
use crate::log;
use crate::transform::StringTransformer;
use crate::utils::plural::plural_count;

/// Run generation for all active variants and enabled targets.
pub fn run_generate(config: &GeneratorConfig) -> Result<()> {
    let variants = config.active_variants()?;
    let mut failed: Vec<String> = Vec::new();

    for variant in variants {
        let assets = scan::list_assets(&variant.assets);
        log!(
            "scan";
            "variant `{}`: {}",
            variant.name,
            plural_count(assets.len(), "asset")
        );

        let variant_dir = config.variant_output_dir(&variant.name);

        if config.xml.enabled {
            run_target(config, "xml", &variant.name, &mut failed, || {
                generate_xml(&config.xml, &assets, &variant_dir)
            });
        }
        if config.java.enabled {
            run_target(config, "java", &variant.name, &mut failed, || {
                let pairs = code_pairs(&config.java, &assets)?;
                JavaEmitter::new(&config.java).write(&pairs, &variant_dir)
            });
        }
        if config.kotlin.enabled {
            run_target(config, "kotlin", &variant.name, &mut failed, || {
                let pairs = code_pairs(&config.kotlin, &assets)?;
                KotlinEmitter::new(&config.kotlin).write(&pairs, &variant_dir)
            });
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        bail!("generation failed for {}", failed.join(", "));
    }
}

/// Run one target, logging success or failure; failures are collected
/// instead of aborting the remaining targets.
fn run_target(
    config: &GeneratorConfig,
    target: &str,
    variant: &str,
    failed: &mut Vec<String>,
    generate: impl FnOnce() -> Result<PathBuf>,
) {
    match generate() {
        Ok(path) => {
            log!(
                "generate";
                "{} [{}] -> {}",
                target,
                variant,
                config.root_relative(&path).display()
            );
        }
        Err(err) => {
            log!("error"; "{} [{}] failed: {:#}", target, variant, err);
            failed.push(format!("{target} [{variant}]"));
        }
    }
}

/// Generate the string-resource file for one variant.
fn generate_xml(
    config: &XmlFileConfig,
    assets: &[String],
    variant_dir: &Path,
) -> Result<PathBuf> {
    let emitter = XmlEmitter::new(config);
    let pairs = emitter.derive_pairs(assets)?;
    emitter.write(&pairs, variant_dir)
}

/// Derive the deduplicated pair list for a code target.
///
/// Shared with the list and check commands so every consumer sees exactly
/// the constants generation would emit.
pub(crate) fn code_pairs(
    config: &SourceFileConfig,
    assets: &[String],
) -> Result<Vec<ConstNameValuePair>> {
    let transformer = StringTransformer::from_rules(&config.replace_in_assets_path, "")
        .context("invalid replacement rules")?;
    let factory = FileConstantsFactory::new(
        config.const_value_prefix.as_str(),
        transformer,
        config.const_name_prefix.as_str(),
    );
    let pairs = constants::derive_pairs(assets.iter().map(String::as_str), &factory)?;
    Ok(pairs)
}
