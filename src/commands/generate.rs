use std::path::PathBuf;

use anyhow::{bail, Result};
use serde_json::json;

use cqrsgen::config::Config;
use cqrsgen::{DirectorySink, FailurePolicy};

pub fn cmd_generate(
    config: &Config,
    out: Option<PathBuf>,
    keep_going: bool,
    prune: bool,
    json: bool,
) -> Result<()> {
    let dir = out.unwrap_or_else(|| config.output.directory.clone());
    let policy = if keep_going {
        FailurePolicy::KeepGoing
    } else {
        FailurePolicy::FailFast
    };

    if config.catalog.entities.is_empty() {
        eprintln!("Warning: catalog is empty, nothing to generate");
    }

    let mut sink = DirectorySink::new(&dir, config.output.extension.as_str());
    let report = super::generator(config).run(&config.catalog.entities, &mut sink, policy)?;
    let pruned = if prune { sink.prune()? } else { Vec::new() };

    if json {
        super::print_json(&json!({
            "directory": &dir,
            "report": &report,
            "pruned": &pruned,
        }))?;
    } else {
        for emitted in &report.emitted {
            println!(
                "{:<9} {}",
                format!("{:?}", emitted.outcome).to_lowercase(),
                sink.path_for(emitted.key.as_str()).display()
            );
        }
        for path in &pruned {
            println!("{:<9} {}", "pruned", path.display());
        }
        for failure in &report.failures {
            println!("{:<9} {}: {}", "failed", failure.entity, failure.message);
        }
        println!(
            "\n{} written, {} unchanged, {} failed",
            report.written_count(),
            report.unchanged_count(),
            report.failures.len()
        );
    }

    if !report.is_success() {
        bail!("{} entities failed to generate", report.failures.len());
    }
    Ok(())
}
