//! Core data types for propstore

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::error::EntryShape;

/// Name/value pairs of one group, in insertion order
pub type Group = IndexMap<String, String>;

/// Top-level mapping of a store, in insertion order
pub type Properties = IndexMap<String, Entry>;

/// A top-level entry: either an ungrouped value or a named group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Value(String),
    Group(Group),
}

impl Entry {
    /// Which shape this entry has
    pub fn shape(&self) -> EntryShape {
        match self {
            Entry::Value(_) => EntryShape::Value,
            Entry::Group(_) => EntryShape::Group,
        }
    }

    pub fn as_value(&self) -> Option<&str> {
        match self {
            Entry::Value(v) => Some(v),
            Entry::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Entry::Group(g) => Some(g),
            Entry::Value(_) => None,
        }
    }

    /// Apply `f` to every value in this entry
    pub(crate) fn map_values(self, mut f: impl FnMut(&str) -> String) -> Entry {
        match self {
            Entry::Value(v) => Entry::Value(f(&v)),
            Entry::Group(g) => Entry::Group(g.into_iter().map(|(k, v)| (k, f(&v))).collect()),
        }
    }
}

impl From<&str> for Entry {
    fn from(value: &str) -> Self {
        Entry::Value(value.to_string())
    }
}

impl From<String> for Entry {
    fn from(value: String) -> Self {
        Entry::Value(value)
    }
}

impl From<Group> for Entry {
    fn from(group: Group) -> Self {
        Entry::Group(group)
    }
}

/// Result of a store lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// Every entry of the store
    All(&'a Properties),
    /// A whole group
    Group(&'a Group),
    /// A single value
    Value(&'a str),
}

impl<'a> Lookup<'a> {
    pub fn as_value(&self) -> Option<&'a str> {
        match self {
            Lookup::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&'a Group> {
        match self {
            Lookup::Group(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_all(&self) -> Option<&'a Properties> {
        match self {
            Lookup::All(p) => Some(p),
            _ => None,
        }
    }
}
