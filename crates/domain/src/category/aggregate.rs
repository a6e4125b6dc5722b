//! Category aggregate implementation.

use chrono::{DateTime, Utc};
use common::CategoryId;
use serde::{Deserialize, Serialize};

use crate::validation::{ValidationHandler, Validator};

use super::validator::CategoryValidator;

/// Category aggregate root.
///
/// All state changes to a catalog category flow through this type. A category
/// is never destroyed here; `deactivate` soft-deletes it by stamping
/// `deleted_at`, and removal from storage is a gateway concern.
///
/// Construction never validates: a category built from bad input can still be
/// inspected and reported through a `Notification` before being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category identifier, assigned once.
    id: CategoryId,

    /// Display name; required by validation, nullable until then.
    name: Option<String>,

    /// Free-form description.
    description: Option<String>,

    /// Soft-delete flag.
    active: bool,

    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,

    /// Present exactly while the category is inactive.
    deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Returns the aggregate type name used in error messages.
    pub fn aggregate_type() -> &'static str {
        "Category"
    }

    /// Creates a new category with a fresh identifier and current timestamps.
    ///
    /// A category created inactive starts out with `deleted_at` stamped.
    pub fn new(name: Option<String>, description: Option<String>, active: bool) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::unique(),
            name,
            description,
            active,
            created_at: now,
            updated_at: now,
            deleted_at: (!active).then_some(now),
        }
    }

    /// Rebuilds a category from stored field values, verbatim.
    ///
    /// Used by gateway implementations when rehydrating from storage.
    pub fn with(
        id: CategoryId,
        name: Option<String>,
        description: Option<String>,
        active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            active,
            created_at,
            updated_at,
            deleted_at,
        }
    }
}

// Query methods
impl Category {
    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

// Mutation methods
impl Category {
    /// Rewrites name, description and the active flag in one operation.
    ///
    /// After the call, `deleted_at` is present exactly when the category is
    /// inactive, and `updated_at` reflects the mutation.
    pub fn update(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        active: bool,
    ) {
        if active {
            self.activate();
        } else {
            self.deactivate();
        }
        self.name = name;
        self.description = description;
        self.updated_at = Utc::now();
    }

    /// Marks the category active, clearing any soft-delete stamp.
    pub fn activate(&mut self) {
        self.deleted_at = None;
        self.active = true;
        self.updated_at = Utc::now();
    }

    /// Soft-deletes the category.
    ///
    /// An already-inactive category keeps its original `deleted_at` stamp.
    pub fn deactivate(&mut self) {
        if self.deleted_at.is_none() {
            self.deleted_at = Some(Utc::now());
        }
        self.active = false;
        self.updated_at = Utc::now();
    }

    /// Runs the category rule set against the current state.
    ///
    /// Does not mutate; violations are appended to the handler.
    pub fn validate(&self, handler: &mut dyn ValidationHandler) {
        CategoryValidator::new(self).validate(handler);
    }
}
