//! Init command - write a cqrsgen.toml template

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::json;

use cqrsgen::config::CONFIG_TEMPLATE;

pub fn cmd_init(path: &Path, force: bool, json: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, CONFIG_TEMPLATE)
        .with_context(|| format!("failed to write {}", path.display()))?;

    if json {
        super::print_json(&json!({ "created": path }))?;
    } else {
        println!("Created {}", path.display());
    }
    Ok(())
}
