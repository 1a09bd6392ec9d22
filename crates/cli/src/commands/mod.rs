//! CLI command implementations.

pub mod console;
pub mod shops;
