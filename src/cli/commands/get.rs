//! Get command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::CliContext;
use crate::core::types::Lookup;

/// Execute the get command
pub fn execute(ctx: &CliContext, name: Option<String>, group: Option<String>) -> Result<()> {
    let store = ctx.load()?;
    let key = super::display_key(name.as_deref(), group.as_deref());

    match store.get(name.as_deref(), group.as_deref()) {
        Some(Lookup::Value(value)) => {
            if ctx.json {
                println!("{}", serde_json::json!({ "key": key, "value": value }));
            } else {
                println!("{}", value);
            }
        },
        Some(Lookup::Group(values)) => {
            if ctx.json {
                println!("{}", serde_json::to_string_pretty(values)?);
            } else {
                for (name, value) in values {
                    println!("{} = {}", name.bold(), value.cyan());
                }
            }
        },
        Some(Lookup::All(_)) => return super::list::execute(ctx),
        None => {
            if ctx.json {
                println!(
                    "{}",
                    serde_json::json!({ "key": key, "value": null, "error": "not set" })
                );
            } else {
                eprintln!("{}", format!("Setting '{}' is not set", key).yellow());
            }
            return Err(anyhow::anyhow!("Setting not found: {}", key));
        },
    }

    Ok(())
}
