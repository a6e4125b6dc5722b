//! Domain error types.

use common::CategoryId;

use crate::validation::Error;

/// Errors raised on the unrecoverable domain channel.
///
/// Validation outcomes collected through a `Notification` never travel this
/// way; this type covers failures the caller cannot repair by fixing input
/// fields one by one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// The aggregate does not exist in storage.
    #[error("{aggregate} with ID {id} was not found")]
    NotFound {
        aggregate: &'static str,
        id: String,
    },

    /// One or more rule violations raised as a hard failure.
    #[error("{}", .0.iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join(", "))]
    Validation(Vec<Error>),
}

impl DomainError {
    /// Builds the not-found error for an aggregate type and identifier.
    pub fn not_found(aggregate: &'static str, id: &CategoryId) -> Self {
        Self::NotFound {
            aggregate,
            id: id.to_string(),
        }
    }

    /// Returns the violations this error carries, as a flat list.
    pub fn errors(&self) -> Vec<Error> {
        match self {
            Self::NotFound { .. } => vec![Error::new(self.to_string())],
            Self::Validation(errors) => errors.clone(),
        }
    }
}
