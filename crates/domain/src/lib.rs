//! Domain layer for the catalog admin system.
//!
//! This crate provides the core domain building blocks:
//! - Category aggregate with its lifecycle operations
//! - Fail-slow validation framework (Error, ValidationHandler, Notification)
//! - CategoryValidator rule set
//! - DomainError taxonomy for unrecoverable domain failures

pub mod category;
pub mod error;
pub mod validation;

pub use category::{Category, CategoryValidator};
pub use error::DomainError;
pub use validation::{Error, Notification, ValidationHandler, Validator};
