//! propstore - an ordered, grouped property store
//!
//! propstore holds application settings as name/value pairs, optionally nested
//! one level under a group name, and serializes them to a literal-array text
//! form that can be read back into an equal store.
//!
//! # Core Features
//!
//! - **Ordered storage**: groups and names keep their first-insertion order
//! - **Case policy**: optional lowercase folding of every key
//! - **Bulk merge**: top-level keys of a merged mapping replace existing ones
//! - **Deterministic text form**: banner-framed groups, `null` for empty values
//! - **Atomic persistence**: files are replaced through a temporary file
//!
//! # Example Usage
//!
//! ```rust
//! use propstore::ConfigurationStore;
//!
//! let mut store = ConfigurationStore::new(false);
//! store.set("sitename", "My Site", Some("general"))?;
//! store.set("debug", "1", None)?;
//!
//! assert_eq!(store.value("sitename", Some("general")), Some("My Site"));
//!
//! let text = store.serialize();
//! let mut reloaded = ConfigurationStore::new(false);
//! reloaded.set_array(propstore::literal::parse(&text)?);
//! assert_eq!(reloaded, store);
//! # Ok::<(), propstore::StoreError>(())
//! ```

pub mod cli;
pub mod core;
pub mod literal;
pub mod persist;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    error::{EntryShape, Result, StoreError},
    types::{Entry, Group, Lookup, Properties},
};

pub use store::{escape, unescape, ConfigurationStore};

/// Current version of propstore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
