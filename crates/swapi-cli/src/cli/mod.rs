//! CLI for the swapi character loader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use swapi_core::config;

use commands::{run_dump, run_load};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "swapi")]
#[command(about = "Load SWAPI characters into a local table and dump it", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch every character, resolve its references and insert it into the characters table.
    Load {
        /// Delete all stored characters first (a plain rerun fails on the first duplicate id).
        #[arg(long)]
        clear: bool,
    },

    /// Print every row of the characters table.
    Dump,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Load { clear } => run_load(&cfg, clear).await?,
            CliCommand::Dump => run_dump(&cfg).await?,
        }

        Ok(())
    }
}
