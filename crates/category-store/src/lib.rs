//! Category storage port and gateway implementations.
//!
//! The [`CategoryGateway`] trait is the only storage surface the rest of the
//! system sees. Two implementations ship with it: an in-memory gateway used
//! by tests and local runs, and a PostgreSQL gateway used in production.

pub mod error;
pub mod gateway;
pub mod memory;
pub mod postgres;
pub mod query;

pub use common::CategoryId;
pub use error::{CategoryStoreError, Result};
pub use gateway::CategoryGateway;
pub use memory::InMemoryCategoryGateway;
pub use postgres::PostgresCategoryGateway;
pub use query::{CategorySearchQuery, Direction, Pagination};
