//! Path command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::CliContext;

/// Execute the path command
pub fn execute(ctx: &CliContext) -> Result<()> {
    let path = &ctx.config_path;

    if ctx.json {
        println!(
            "{}",
            serde_json::json!({
                "config_file": path.display().to_string(),
                "exists": path.exists()
            })
        );
    } else {
        println!("{}: {}", "Configuration file".bold(), path.display().to_string().cyan());
        if path.exists() {
            println!("{}: {}", "Status".bold(), "exists".green());
        } else {
            println!("{}: {}", "Status".bold(), "not created yet".yellow());
        }
    }

    Ok(())
}
