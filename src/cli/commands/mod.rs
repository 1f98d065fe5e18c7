//! CLI command implementations

pub mod flush;
pub mod get;
pub mod import;
pub mod list;
pub mod path;
pub mod set;
pub mod show;
pub mod unset;

/// Human-readable key: `group.name`, `name`, or `group`
pub fn display_key(name: Option<&str>, group: Option<&str>) -> String {
    match (name.filter(|n| !n.is_empty()), group.filter(|g| !g.is_empty())) {
        (Some(name), Some(group)) => format!("{}.{}", group, name),
        (Some(name), None) => name.to_string(),
        (None, Some(group)) => group.to_string(),
        (None, None) => String::new(),
    }
}
