//! propstore CLI
//!
//! Command-line interface for reading and editing a propstore settings file.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use propstore::cli::{commands, Cli, CliContext, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let ctx = CliContext::new(cli.config, cli.lowercase, cli.json, cli.quiet)?;

    // Execute the command
    match cli.command {
        Commands::Get { name, group } => commands::get::execute(&ctx, name, group),
        Commands::Set { name, value, group } => commands::set::execute(&ctx, name, value, group),
        Commands::Unset { name, group } => commands::unset::execute(&ctx, name, group),
        Commands::List => commands::list::execute(&ctx),
        Commands::Show => commands::show::execute(&ctx),
        Commands::Import { file } => commands::import::execute(&ctx, file),
        Commands::Flush { yes } => commands::flush::execute(&ctx, yes),
        Commands::Path => commands::path::execute(&ctx),
    }
}
