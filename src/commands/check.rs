use anyhow::{bail, Result};

use cqrsgen::config::Config;
use cqrsgen::{FailurePolicy, MemorySink};

/// Run the full pass into memory; every entity is tried
pub fn cmd_check(config: &Config, json: bool) -> Result<()> {
    let mut sink = MemorySink::new();
    let report =
        super::generator(config).run(&config.catalog.entities, &mut sink, FailurePolicy::KeepGoing)?;

    if json {
        super::print_json(&report)?;
    } else {
        for emitted in &report.emitted {
            println!("ok      {} ({})", emitted.entity, emitted.key);
        }
        for failure in &report.failures {
            println!("error   {}: {}", failure.entity, failure.message);
        }
        println!(
            "\n{} of {} entities render cleanly",
            report.emitted.len(),
            config.catalog.entities.len()
        );
    }

    if !report.is_success() {
        bail!("check failed for {} entities", report.failures.len());
    }
    Ok(())
}
