//! `vbsp` binary entry point.
//!
//! Parses arguments, initializes logging and dispatches to a subcommand.
//! The decoding itself lives in the vbsp-formats crate.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing::Level;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_max_level(Level::from(cli.log_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::Info { file, format, all } => commands::info(&file, format, all, &mut stdout)?,
        Commands::Entry { file, lump } => commands::entry(&file, lump, &mut stdout)?,
        Commands::Extract { file, lump, output } => {
            commands::extract(&file, lump, output.as_deref(), &mut stdout)?;
        }
    }

    Ok(())
}
