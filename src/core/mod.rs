//! Core types and utilities for propstore
//!
//! This module contains the fundamental data types and error handling
//! used throughout the crate.

pub mod error;
pub mod types;

// Re-export commonly used items
pub use error::{EntryShape, Result, StoreError};
pub use types::{Entry, Group, Lookup, Properties};
