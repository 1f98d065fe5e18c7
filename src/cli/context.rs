//! Options shared by every command

use std::path::PathBuf;

use anyhow::Result;

use crate::persist;
use crate::store::ConfigurationStore;

/// Global CLI options, passed to each command
#[derive(Debug, Clone)]
pub struct CliContext {
    pub config_path: PathBuf,
    pub lowercase: bool,
    pub json: bool,
    pub quiet: bool,
}

impl CliContext {
    /// Build a context, falling back to the default configuration path
    pub fn new(config: Option<PathBuf>, lowercase: bool, json: bool, quiet: bool) -> Result<Self> {
        let config_path = match config {
            Some(path) => path,
            None => persist::default_config_path()?,
        };
        Ok(Self {
            config_path,
            lowercase,
            json,
            quiet,
        })
    }

    /// Load the configuration file, empty if it does not exist yet
    pub fn load(&self) -> Result<ConfigurationStore> {
        Ok(persist::load(&self.config_path, self.lowercase)?)
    }

    pub fn save(&self, store: &ConfigurationStore) -> Result<()> {
        Ok(persist::save(store, &self.config_path)?)
    }
}
