//! JSON import and export
//!
//! JSON documents carry plain values, so they are escaped on the way in and
//! come out of [`ConfigurationStore::set_array`] unchanged.

use std::io::Read;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::core::error::Result;
use crate::core::types::{Entry, Properties};
use crate::store::{escape, ConfigurationStore};

/// Accepted JSON shapes; `null` reads as the empty string
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonEntry {
    Value(Option<String>),
    Group(IndexMap<String, Option<String>>),
}

impl From<JsonEntry> for Entry {
    fn from(entry: JsonEntry) -> Self {
        match entry {
            JsonEntry::Value(value) => Entry::Value(escape(&value.unwrap_or_default())),
            JsonEntry::Group(values) => Entry::Group(
                values
                    .into_iter()
                    .map(|(name, value)| (name, escape(&value.unwrap_or_default())))
                    .collect(),
            ),
        }
    }
}

/// Merge a JSON object into the store. Returns the number of top-level
/// entries merged.
pub fn import_json<R: Read>(store: &mut ConfigurationStore, reader: R) -> Result<usize> {
    let document: IndexMap<String, JsonEntry> = serde_json::from_reader(reader)?;
    let entries: Properties = document
        .into_iter()
        .map(|(key, entry)| (key, Entry::from(entry)))
        .collect();

    let count = entries.len();
    debug!(entries = count, "importing JSON document");
    store.set_array(entries);
    Ok(count)
}

/// Pretty-printed JSON of every entry, in insertion order
pub fn export_json(store: &ConfigurationStore) -> Result<String> {
    Ok(serde_json::to_string_pretty(store.properties())?)
}
