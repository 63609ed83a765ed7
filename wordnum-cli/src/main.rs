//! wordnum command-line entry point

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use wordnum_cli::{commands::Commands, config::CliConfig, init_logging};

/// Spell numbers and currency amounts in words
#[derive(Debug, Parser)]
#[command(name = "wordnum", version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, value_name = "FILE", env = "WORDNUM_CONFIG")]
    config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    log::debug!("Arguments: {cli:?}");
    let config = CliConfig::load(cli.config.as_deref())?;
    cli.command.execute(&config)
}
