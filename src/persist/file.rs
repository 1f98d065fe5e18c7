//! Config file persistence
//!
//! Files hold the literal-array text produced by
//! [`crate::ConfigurationStore::serialize`].

use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tempfile::NamedTempFile;
use tracing::info;

use crate::core::error::{Result, StoreError};
use crate::literal;
use crate::store::ConfigurationStore;

/// File name used inside the configuration directory
pub const CONFIG_FILE_NAME: &str = "config.php";

/// Get the path to the default configuration file
pub fn default_config_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "propstore").ok_or(StoreError::ConfigDirNotFound)?;
    Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Load a store from `path`. A missing file yields an empty store.
pub fn load(path: &Path, force_lower_case: bool) -> Result<ConfigurationStore> {
    if !path.exists() {
        info!(path = %path.display(), "no configuration file, starting empty");
        return Ok(ConfigurationStore::new(force_lower_case));
    }
    load_existing(path, force_lower_case)
}

/// Load a store from `path`, failing if the file does not exist
pub fn load_existing(path: &Path, force_lower_case: bool) -> Result<ConfigurationStore> {
    if !path.exists() {
        return Err(StoreError::file_not_found(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let mut store = ConfigurationStore::new(force_lower_case);
    store.set_array(literal::parse(&content)?);

    info!(path = %path.display(), entries = store.len(), "loaded configuration");
    Ok(store)
}

/// Save a store to `path`, replacing the file atomically
pub fn save(store: &ConfigurationStore, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    // same directory so the rename stays on one file system
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(store.serialize().as_bytes())?;
    temp.flush()?;
    temp.persist(path)?;

    info!(path = %path.display(), entries = store.len(), "saved configuration");
    Ok(())
}
