//! Flush command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::CliContext;

/// Execute the flush command
pub fn execute(ctx: &CliContext, yes: bool) -> Result<()> {
    if !yes {
        eprintln!(
            "{}",
            "This removes every stored setting. Re-run with --yes to confirm.".yellow()
        );
        return Err(anyhow::anyhow!("Flush not confirmed"));
    }

    let mut store = ctx.load()?;
    let removed = store.len();
    store.flush();
    ctx.save(&store)?;

    if ctx.json {
        println!(
            "{}",
            serde_json::json!({ "action": "flush", "entries": removed, "status": "success" })
        );
    } else if !ctx.quiet {
        println!("{} Flushed {} entries", "✓".green(), removed);
    }

    Ok(())
}
