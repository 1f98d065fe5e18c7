//! List command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::CliContext;
use crate::persist;

/// Execute the list command
pub fn execute(ctx: &CliContext) -> Result<()> {
    let store = ctx.load()?;

    if ctx.json {
        println!("{}", persist::export_json(&store)?);
        return Ok(());
    }

    let entries = store.list();
    if entries.is_empty() {
        if !ctx.quiet {
            println!("{}", "No settings stored".yellow());
            println!();
            println!("{}", "To add one:".bold());
            println!("  {}", "propstore set sitename \"My Site\" --group general".cyan());
        }
        return Ok(());
    }

    for (key, value) in entries {
        println!("{} = {}", key.bold(), value.cyan());
    }

    Ok(())
}
