//! Fail-slow validation primitives.
//!
//! Validators write into a [`ValidationHandler`] instead of returning on the
//! first violation, so every applicable rule is reported in one pass.

use serde::Serialize;

use crate::error::DomainError;

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Error {
    pub message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Ordered accumulator validators append violations to.
pub trait ValidationHandler {
    /// Appends a single violation, preserving insertion order.
    fn append(&mut self, error: Error);

    /// Returns all violations collected so far.
    fn errors(&self) -> &[Error];

    /// Returns true if at least one violation was collected.
    fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }
}

/// A rule set that can be applied to an entity.
pub trait Validator {
    /// Runs every applicable rule, appending violations to the handler.
    fn validate(&self, handler: &mut dyn ValidationHandler);
}

/// Concrete fail-slow [`ValidationHandler`].
///
/// Collects violations across independent validation steps; a failing step
/// never aborts collection of the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    errors: Vec<Error>,
}

impl Notification {
    /// Creates an empty notification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a notification holding a single violation.
    pub fn from_error(error: Error) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Appends every violation collected by another notification.
    pub fn merge(&mut self, other: Notification) -> &mut Self {
        self.errors.extend(other.errors);
        self
    }

    /// Runs a validation step, converting any raised [`DomainError`] into
    /// appended violations.
    ///
    /// Returns the step's value on success, `None` if the step failed.
    pub fn validate<T, F>(&mut self, step: F) -> Option<T>
    where
        F: FnOnce() -> Result<T, DomainError>,
    {
        match step() {
            Ok(value) => Some(value),
            Err(error) => {
                self.errors.extend(error.errors());
                None
            }
        }
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: Error) {
        self.errors.push(error);
    }

    fn errors(&self) -> &[Error] {
        &self.errors
    }
}
