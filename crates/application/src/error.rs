//! Use-case error channels.

use category_store::CategoryStoreError;
use domain::{DomainError, Notification};
use thiserror::Error;

/// Non-success outcomes of a use case.
///
/// The three variants are distinct channels and are never conflated:
/// validation failures are recoverable and carry the full fail-slow error
/// list, not-found is an unrecoverable domain failure, and gateway errors
/// are infrastructure failures propagated unmodified.
#[derive(Debug, Error)]
pub enum UseCaseError {
    /// Recoverable validation outcome; every violated rule is listed.
    #[error("{}", .0.errors().iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join(", "))]
    Validation(Notification),

    /// The requested aggregate does not exist.
    #[error(transparent)]
    NotFound(DomainError),

    /// Infrastructure failure from the gateway; fatal to the current call.
    #[error(transparent)]
    Store(#[from] CategoryStoreError),
}
