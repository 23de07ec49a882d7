//! Catalog field constraints.
//!
//! The limits mirror the column checks in the `categories`, `subcategories`
//! and `items` migrations so that seed input can be rejected before it
//! reaches the database.

use validator::{Validate, ValidationError};

use crate::error::CoreError;

/// Maximum length of `categories.name`.
pub const CATEGORY_NAME_MAX_LEN: u64 = 100;

/// Maximum length of `subcategories.name`.
pub const SUBCATEGORY_NAME_MAX_LEN: u64 = 100;

/// Maximum length of `items.name`.
pub const ITEM_NAME_MAX_LEN: u64 = 150;

/// Reject names made only of whitespace, which the columns' `btrim` checks
/// would refuse at insert time.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Run `validator` checks on `input`, mapping failures to
/// [`CoreError::Validation`] prefixed with the entity name.
pub fn validate_entry<T: Validate>(entity: &str, input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(format!("{entity}: {errors}")))
}
