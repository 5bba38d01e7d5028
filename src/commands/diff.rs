use std::path::PathBuf;

use anyhow::Result;

use cqrsgen::application::{diff_directory, ChangeType};
use cqrsgen::config::Config;
use cqrsgen::{FailurePolicy, MemorySink};

/// Render everything into memory and compare with the output directory
pub fn cmd_diff(config: &Config, out: Option<PathBuf>, json: bool) -> Result<()> {
    let dir = out.unwrap_or_else(|| config.output.directory.clone());
    let mut sink = MemorySink::new();
    super::generator(config).run(&config.catalog.entities, &mut sink, FailurePolicy::FailFast)?;

    let result = diff_directory(&sink.into_inner(), &dir, &config.output.extension)?;

    if json {
        return super::print_json(&result);
    }

    for entry in &result.entries {
        if let Some(patch) = &entry.patch {
            print!("{}", patch);
        }
    }
    if result.has_changes() {
        println!(
            "\n{} to create, {} to update, {} to remove, {} unchanged",
            result.count(ChangeType::Create),
            result.count(ChangeType::Update),
            result.count(ChangeType::Remove),
            result.count(ChangeType::Unchanged)
        );
    } else {
        println!("No changes.");
    }
    Ok(())
}
