//! Unset command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::CliContext;

/// Execute the unset command
pub fn execute(ctx: &CliContext, name: String, group: Option<String>) -> Result<()> {
    let mut store = ctx.load()?;
    let key = super::display_key(Some(&name), group.as_deref());
    let removed = store.remove(&name, group.as_deref()).is_some();

    if removed {
        ctx.save(&store)?;
    }

    if ctx.json {
        println!(
            "{}",
            serde_json::json!({
                "action": "unset",
                "key": key,
                "status": if removed { "success" } else { "not set" }
            })
        );
    } else if !ctx.quiet {
        if removed {
            println!("{} {}", "✓".green(), format!("Unset {}", key).bold());
        } else {
            println!("{}", format!("Setting '{}' was not set", key).yellow());
        }
    }

    Ok(())
}
