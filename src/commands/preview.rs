use anyhow::Result;
use serde_json::json;

use cqrsgen::config::Config;

pub fn cmd_preview(config: &Config, entity: &str, json: bool) -> Result<()> {
    let mut unit = super::generator(config).generate_entity(entity)?;
    let file_name = unit.key().file_name(&config.output.extension);
    let hash = unit.hash().to_string();

    if json {
        super::print_json(&json!({
            "key": unit.key(),
            "file": file_name,
            "hash": hash,
            "text": unit.text(),
        }))?;
    } else {
        print!("{}", unit.text());
    }
    Ok(())
}
