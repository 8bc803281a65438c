//! The list command: print derived constants without writing files.
//!
//! Useful for inspecting what a target would generate (especially the
//! effect of replacement rules) before wiring the output into a build.

use anyhow::Result;

use super::args::{ListArgs, Target};
use super::generate::code_pairs;
use crate::asset::scan;
use crate::config::GeneratorConfig;
use crate::constants::ConstNameValuePair;
use crate::emit::XmlEmitter;
use crate::log;
use crate::utils::plural::plural_count;

/// Print constants for all active variants using the selected target's
/// naming scheme.
pub fn run_list(config: &GeneratorConfig, args: &ListArgs) -> Result<()> {
    let variants = config.active_variants()?;
    let mut json_out = Vec::new();

    for variant in variants {
        let assets = scan::list_assets(&variant.assets);
        let pairs = pairs_for_target(config, args.target, &assets)?;

        if args.json {
            json_out.push(serde_json::json!({
                "variant": variant.name,
                "target": args.target.as_str(),
                "constants": pairs,
            }));
        } else {
            log!(
                "list";
                "variant `{}`: {} ({})",
                variant.name,
                plural_count(pairs.len(), "constant"),
                args.target.as_str()
            );
            for pair in &pairs {
                println!("{} = {}", pair.name, pair.value);
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&json_out)?);
    }

    Ok(())
}

/// Derive pairs with the naming scheme of the selected target.
fn pairs_for_target(
    config: &GeneratorConfig,
    target: Target,
    assets: &[String],
) -> Result<Vec<ConstNameValuePair>> {
    match target {
        Target::Xml => Ok(XmlEmitter::new(&config.xml).derive_pairs(assets)?),
        Target::Java => code_pairs(&config.java, assets),
        Target::Kotlin => code_pairs(&config.kotlin, assets),
    }
}
