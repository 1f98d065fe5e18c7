//! Show command implementation

use anyhow::Result;

use crate::cli::context::CliContext;

/// Execute the show command
pub fn execute(ctx: &CliContext) -> Result<()> {
    let store = ctx.load()?;
    print!("{}", store.serialize());
    Ok(())
}
