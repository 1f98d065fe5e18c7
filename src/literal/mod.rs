//! Persisted literal-array text form
//!
//! The writer renders a store as a nested `array( 'key' => 'value', ... )`
//! expression with banner comments per group; the parser reads it back.

pub mod parser;
pub mod writer;

// Re-export commonly used items
pub use parser::parse;
pub use writer::render;
