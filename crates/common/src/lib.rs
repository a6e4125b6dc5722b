//! Shared types for the catalog admin system.

pub mod types;

pub use types::CategoryId;
