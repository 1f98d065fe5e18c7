//! The configuration store and its value escaping

pub mod escape;
pub mod properties;

// Re-export commonly used items
pub use escape::{escape, unescape};
pub use properties::ConfigurationStore;
