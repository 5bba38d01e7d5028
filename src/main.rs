//! cqrsgen CLI - generate CQRS artifacts for C# entities
//!
//! Usage: cqrsgen [--config PATH] [-v...] [--json] <COMMAND>
//!
//! Commands:
//!   generate  Write one unit per catalog entity
//!   check     Build and render without writing
//!   preview   Print the unit for one entity
//!   diff      Preview changes without writing
//!   init      Write a cqrsgen.toml template

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;

use cli::{Cli, Commands};

/// Log to stderr so stdout stays clean for `--json` and `preview`.
/// `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "cqrsgen=debug",
        _ => "cqrsgen=trace",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            out,
            keep_going,
            prune,
        } => {
            let config = commands::load_config(&cli.config)?;
            commands::generate::cmd_generate(&config, out, keep_going, prune, cli.json)
        }
        Commands::Check => {
            let config = commands::load_config(&cli.config)?;
            commands::check::cmd_check(&config, cli.json)
        }
        Commands::Preview { entity } => {
            let config = commands::load_config(&cli.config)?;
            commands::preview::cmd_preview(&config, &entity, cli.json)
        }
        Commands::Diff { out } => {
            let config = commands::load_config(&cli.config)?;
            commands::diff::cmd_diff(&config, out, cli.json)
        }
        Commands::Init { force } => commands::init::cmd_init(&cli.config, force, cli.json),
    }
}
