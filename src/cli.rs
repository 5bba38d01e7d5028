use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// cqrsgen - generate CQRS commands, queries and handlers for C# entities
#[derive(Parser, Debug)]
#[command(name = "cqrsgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file
    #[arg(long, global = true, default_value = "cqrsgen.toml")]
    pub config: PathBuf,

    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate one unit per catalog entity into the output directory
    Generate {
        /// Output directory (overrides config)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Continue past entities that fail, report them at the end
        #[arg(long)]
        keep_going: bool,

        /// Delete generated files no catalog entity maps to
        #[arg(long)]
        prune: bool,
    },

    /// Build and render every entity without writing (exits non-zero on failures)
    Check,

    /// Print the rendered unit for one entity
    Preview {
        /// Entity name, e.g. Product
        entity: String,
    },

    /// Show what `generate` would change on disk
    Diff {
        /// Output directory (overrides config)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Write a cqrsgen.toml template
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}
