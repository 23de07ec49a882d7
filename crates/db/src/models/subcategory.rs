//! SubCategory entity model and DTOs.

use carte_core::catalog::{validate_not_blank, SUBCATEGORY_NAME_MAX_LEN};
use carte_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `subcategories` table. Owned by exactly one category.
#[derive(Debug, Clone, FromRow)]
pub struct SubCategory {
    pub id: DbId,
    pub category_id: DbId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new subcategory under `category_id`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSubCategory {
    pub category_id: DbId,
    #[validate(length(min = 1, max = SUBCATEGORY_NAME_MAX_LEN))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
