//! Builtin sanitizers and the value types composed from them.

pub mod sanitizer;
pub mod types;
