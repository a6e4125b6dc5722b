//! Category rule set.

use crate::validation::{Error, ValidationHandler, Validator};

use super::Category;

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 255;

/// Applies the category rules in one fail-slow pass.
///
/// Only `name` carries invariants; the checks are ordered so that at most one
/// name violation is reported per pass.
pub struct CategoryValidator<'a> {
    category: &'a Category,
}

impl<'a> CategoryValidator<'a> {
    pub fn new(category: &'a Category) -> Self {
        Self { category }
    }

    fn check_name_constraints(&self, handler: &mut dyn ValidationHandler) {
        let Some(name) = self.category.name() else {
            handler.append(Error::new("'name' should not be null"));
            return;
        };

        let trimmed = name.trim();
        if trimmed.is_empty() {
            handler.append(Error::new("'name' should not be empty"));
            return;
        }

        let length = trimmed.chars().count();
        if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&length) {
            handler.append(Error::new("'name' must between 3 and 255"));
        }
    }
}

impl Validator for CategoryValidator<'_> {
    fn validate(&self, handler: &mut dyn ValidationHandler) {
        self.check_name_constraints(handler);
    }
}
