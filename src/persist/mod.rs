//! Loading and saving stores
//!
//! The store itself never touches the file system. This module reads a
//! persisted literal file into a [`crate::ConfigurationStore`] and writes it
//! back atomically, and converts stores to and from JSON documents.

pub mod file;
pub mod json;

// Re-export commonly used items
pub use file::{default_config_path, load, load_existing, save};
pub use json::{export_json, import_json};
