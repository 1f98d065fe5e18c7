//! Set command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::CliContext;

/// Execute the set command
pub fn execute(ctx: &CliContext, name: String, value: String, group: Option<String>) -> Result<()> {
    let mut store = ctx.load()?;
    store.set(&name, &value, group.as_deref())?;
    ctx.save(&store)?;

    let key = super::display_key(Some(&name), group.as_deref());
    let stored = store.value(&name, group.as_deref()).unwrap_or_default();
    if ctx.json {
        println!(
            "{}",
            serde_json::json!({
                "action": "set",
                "key": key,
                "value": stored,
                "status": "success"
            })
        );
    } else if !ctx.quiet {
        println!("{} {} = {}", "✓".green(), key.bold(), stored.cyan());
    }

    Ok(())
}
