//! Command handlers for the cqrsgen binary

use std::path::Path;

use anyhow::Result;

use cqrsgen::config::Config;
use cqrsgen::{CSharpRenderer, Generator};

pub mod check;
pub mod diff;
pub mod generate;
pub mod init;
pub mod preview;

/// Load the config file (defaults when absent) and print unknown-key warnings
pub fn load_config(path: &Path) -> Result<Config> {
    let (config, warnings) = Config::load_or_default(path)?;
    for warning in &warnings {
        eprintln!("Warning: {}", warning);
    }
    Ok(config)
}

pub fn generator(config: &Config) -> Generator<CSharpRenderer> {
    Generator::new(config.namespace.name.clone(), CSharpRenderer::new())
        .with_references(config.namespace.references.iter().cloned())
}

pub fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
