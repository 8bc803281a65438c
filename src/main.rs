//! Assetgen - generates asset constants files from asset directories.

#![allow(dead_code)]

mod asset;
mod cli;
mod config;
mod constants;
mod emit;
mod logger;
mod transform;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::GeneratorConfig;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    // Init runs before config loading: there is no config file yet
    if let Commands::Init { dir } = &cli.command {
        return cli::init::run_init(dir.as_deref());
    }

    let config = GeneratorConfig::load(cli)?;

    match &cli.command {
        Commands::Generate { .. } => cli::generate::run_generate(&config),
        Commands::List { args } => cli::list::run_list(&config, args),
        Commands::Check => cli::check::run_check(&config),
        Commands::Init { .. } => Ok(()),
    }
}
