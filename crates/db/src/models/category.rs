//! Category entity model and DTOs.

use carte_core::catalog::{validate_not_blank, CATEGORY_NAME_MAX_LEN};
use carte_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(length(min = 1, max = CATEGORY_NAME_MAX_LEN))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    /// Stored as an empty string if omitted.
    #[serde(default)]
    pub description: Option<String>,
}
