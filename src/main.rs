// src/main.rs

// Declare modules
pub mod bundle;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod generator;
pub mod glyph;
pub mod manifest;
pub mod report;
pub mod resolver;
pub mod synth;

use anyhow::Context;
use clap::Parser;
use log::info;

use crate::cli::Cli;

/// Main entry point for `bitmap-font-init`.
fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let params = Cli::parse()
        .into_params()
        .context("Failed to load generation parameters")?;
    params
        .validate()
        .context("Invalid generation parameters")?;

    info!(
        "Initializing font '{}' in {}",
        params.font_name,
        params.output_directory.display()
    );

    let summary = generator::run(&params)
        .with_context(|| format!("Failed to generate font '{}'", params.font_name))?;

    println!("{}", summary);
    Ok(())
}
