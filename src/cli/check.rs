//! The check command: diagnose configuration and asset roots.
//!
//! Runs the same derivation pipeline as generate, but writes nothing.
//! Missing asset roots are warnings (a fresh variant may own no assets
//! yet); derived-name collisions are problems and fail the command.

use anyhow::{Result, bail};

use super::generate::code_pairs;
use crate::asset::scan;
use crate::config::GeneratorConfig;
use crate::emit::XmlEmitter;
use crate::log;
use crate::utils::plural::plural_count;

/// Validate every variant against every enabled target.
pub fn run_check(config: &GeneratorConfig) -> Result<()> {
    let variants = config.active_variants()?;
    let mut problems = 0usize;

    for variant in variants {
        for dir in &variant.assets {
            if !dir.exists() {
                log!(
                    "warning";
                    "variant `{}`: asset root '{}' not found",
                    variant.name,
                    config.root_relative(dir).display()
                );
            }
        }

        let assets = scan::list_assets(&variant.assets);
        log!(
            "check";
            "variant `{}`: {}",
            variant.name,
            plural_count(assets.len(), "asset")
        );

        if config.xml.enabled
            && let Err(err) = XmlEmitter::new(&config.xml).derive_pairs(&assets)
        {
            log!("error"; "xml [{}]: {}", variant.name, err);
            problems += 1;
        }
        if config.java.enabled
            && let Err(err) = code_pairs(&config.java, &assets)
        {
            log!("error"; "java [{}]: {:#}", variant.name, err);
            problems += 1;
        }
        if config.kotlin.enabled
            && let Err(err) = code_pairs(&config.kotlin, &assets)
        {
            log!("error"; "kotlin [{}]: {:#}", variant.name, err);
            problems += 1;
        }
    }

    if problems > 0 {
        bail!("check found {}", plural_count(problems, "problem"));
    }

    log!("check"; "ok");
    Ok(())
}
