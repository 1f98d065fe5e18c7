//! In-memory property store
//!
//! Holds name/value pairs, optionally nested one level under a group name.
//! Both levels keep insertion order so that [`ConfigurationStore::serialize`]
//! is deterministic.

use std::borrow::Cow;
use std::fmt;

use tracing::debug;

use crate::core::error::{EntryShape, Result, StoreError};
use crate::core::types::{Entry, Group, Lookup, Properties};
use crate::literal;
use crate::store::escape::unescape;

/// Ordered, optionally grouped settings store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurationStore {
    properties: Properties,
    force_lower_case: bool,
}

impl ConfigurationStore {
    /// Create an empty store. With `force_lower_case`, every group and name
    /// key is folded to lowercase on set, get and remove.
    pub fn new(force_lower_case: bool) -> Self {
        Self {
            properties: Properties::new(),
            force_lower_case,
        }
    }

    pub fn force_lower_case(&self) -> bool {
        self.force_lower_case
    }

    /// Number of top-level entries
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Set a single value, un-escaping it first.
    ///
    /// An empty or absent `group` stores the value ungrouped. Fails only when
    /// the target key already holds the other shape (a group where a value is
    /// written, or a value where a group is needed).
    pub fn set(&mut self, name: &str, value: &str, group: Option<&str>) -> Result<()> {
        let name = self.normalize(name).into_owned();
        let value = unescape(value);

        match non_empty(group) {
            Some(group) => {
                let group = self.normalize(group);
                if let Some(existing @ Entry::Value(_)) = self.properties.get(group.as_ref()) {
                    return Err(StoreError::shape_conflict(group, existing.shape()));
                }

                debug!(group = %group, name = %name, "setting grouped value");
                let entry = self
                    .properties
                    .entry(group.into_owned())
                    .or_insert_with(|| Entry::Group(Group::new()));
                if let Entry::Group(values) = entry {
                    values.insert(name, value);
                }
            },
            None => match self.properties.get_mut(&name) {
                Some(existing @ Entry::Group(_)) => {
                    return Err(StoreError::shape_conflict(name, existing.shape()));
                },
                Some(Entry::Value(existing)) => {
                    debug!(name = %name, "overwriting value");
                    *existing = value;
                },
                None => {
                    debug!(name = %name, "setting value");
                    self.properties.insert(name, Entry::Value(value));
                },
            },
        }

        Ok(())
    }

    /// Merge a whole mapping into the store.
    ///
    /// Every value is un-escaped. Each incoming top-level key replaces the
    /// existing entry wholesale, keeping its position; new keys are appended.
    pub fn set_array(&mut self, entries: Properties) {
        debug!(entries = entries.len(), "merging entries");

        for (key, entry) in entries {
            let key = self.normalize(&key).into_owned();
            let entry = match entry.map_values(unescape) {
                Entry::Group(values) => Entry::Group(
                    values
                        .into_iter()
                        .map(|(name, value)| (self.normalize(&name).into_owned(), value))
                        .collect(),
                ),
                value => value,
            };
            self.properties.insert(key, entry);
        }
    }

    /// Look up a value, a group, or the whole store.
    ///
    /// With neither `name` nor `group` (absent or empty) this returns every
    /// entry. With only `group`, the whole group. Missing keys yield `None`.
    pub fn get(&self, name: Option<&str>, group: Option<&str>) -> Option<Lookup<'_>> {
        match (non_empty(name), non_empty(group)) {
            (None, None) => Some(Lookup::All(&self.properties)),
            (name, Some(group)) => {
                let values = self.group(group)?;
                match name {
                    Some(name) => values
                        .get(self.normalize(name).as_ref())
                        .map(|value| Lookup::Value(value.as_str())),
                    None => Some(Lookup::Group(values)),
                }
            },
            (Some(name), None) => {
                self.properties
                    .get(self.normalize(name).as_ref())
                    .map(|entry| match entry {
                        Entry::Value(value) => Lookup::Value(value.as_str()),
                        Entry::Group(values) => Lookup::Group(values),
                    })
            },
        }
    }

    /// Look up a single value
    pub fn value(&self, name: &str, group: Option<&str>) -> Option<&str> {
        self.get(Some(name), group).and_then(|found| found.as_value())
    }

    /// Look up a whole group
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.properties
            .get(self.normalize(name).as_ref())
            .and_then(Entry::as_group)
    }

    /// Every entry, in insertion order
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Remove a value and return it.
    ///
    /// A grouped removal leaves the group in place even when it becomes
    /// empty. When the grouped entry does not exist, an ungrouped entry
    /// named `name` is removed instead.
    pub fn remove(&mut self, name: &str, group: Option<&str>) -> Option<Entry> {
        let name = self.normalize(name).into_owned();

        if let Some(group) = non_empty(group) {
            let group = self.normalize(group);
            if let Some(Entry::Group(values)) = self.properties.get_mut(group.as_ref()) {
                if let Some(value) = values.shift_remove(&name) {
                    debug!(group = %group, name = %name, "removed grouped value");
                    return Some(Entry::Value(value));
                }
            }
        }

        let removed = self.properties.shift_remove(&name);
        if removed.is_some() {
            debug!(name = %name, "removed entry");
        }
        removed
    }

    /// Drop every entry. The case policy is kept.
    pub fn flush(&mut self) {
        debug!(entries = self.properties.len(), "flushing store");
        self.properties.clear();
    }

    /// Render the store in its persisted literal-array form
    pub fn serialize(&self) -> String {
        literal::writer::render(&self.properties)
    }

    /// Flatten into `(key, value)` pairs, grouped keys as `group.name`
    pub fn list(&self) -> Vec<(String, String)> {
        let mut entries = Vec::new();
        for (key, entry) in &self.properties {
            match entry {
                Entry::Value(value) => entries.push((key.clone(), value.clone())),
                Entry::Group(values) => {
                    for (name, value) in values {
                        entries.push((format!("{}.{}", key, name), value.clone()));
                    }
                },
            }
        }
        entries
    }

    fn normalize<'a>(&self, key: &'a str) -> Cow<'a, str> {
        if self.force_lower_case && key.chars().any(char::is_uppercase) {
            Cow::Owned(key.to_lowercase())
        } else {
            Cow::Borrowed(key)
        }
    }
}

impl fmt::Display for ConfigurationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

fn non_empty(key: Option<&str>) -> Option<&str> {
    key.filter(|k| !k.is_empty())
}
