//! Command-line interface for propstore

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
pub mod context;

pub use context::CliContext;

/// propstore - ordered, grouped settings file manager
#[derive(Parser)]
#[command(
    name = "propstore",
    version,
    about = "Read and edit a grouped settings file",
    long_about = "propstore keeps application settings as name/value pairs, optionally grouped, and persists them as a re-loadable literal-array file."
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, env = "PROPSTORE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Fold every group and name to lowercase
    #[arg(long, global = true)]
    pub lowercase: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a value, or a whole group
    Get {
        /// Setting name (omit with --group to print the whole group)
        name: Option<String>,

        /// Group the setting belongs to
        #[arg(short, long)]
        group: Option<String>,
    },

    /// Set a value and save
    Set {
        /// Setting name
        name: String,

        /// Value, in escaped form
        value: String,

        /// Group the setting belongs to
        #[arg(short, long)]
        group: Option<String>,
    },

    /// Remove a value and save
    Unset {
        /// Setting name
        name: String,

        /// Group the setting belongs to
        #[arg(short, long)]
        group: Option<String>,
    },

    /// List every setting as group.name = value
    List,

    /// Print the persisted literal form
    Show,

    /// Merge a JSON document into the configuration and save
    Import {
        /// JSON file to merge
        file: PathBuf,
    },

    /// Remove every setting and save
    Flush {
        /// Skip the confirmation check
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show the configuration file location
    Path,
}
