//! Import command implementation

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::cli::context::CliContext;
use crate::persist;

/// Execute the import command
pub fn execute(ctx: &CliContext, file: PathBuf) -> Result<()> {
    let reader = File::open(&file)
        .map(BufReader::new)
        .with_context(|| format!("Failed to open {}", file.display()))?;

    let mut store = ctx.load()?;
    let merged = persist::import_json(&mut store, reader)
        .with_context(|| format!("Failed to import {}", file.display()))?;
    ctx.save(&store)?;

    if ctx.json {
        println!(
            "{}",
            serde_json::json!({
                "action": "import",
                "file": file.display().to_string(),
                "entries": merged,
                "status": "success"
            })
        );
    } else if !ctx.quiet {
        println!(
            "{} Imported {} entries from {}",
            "✓".green(),
            merged.to_string().bold(),
            file.display().to_string().cyan()
        );
    }

    Ok(())
}
