//! Item entity model and DTOs.

use carte_core::catalog::{validate_not_blank, ITEM_NAME_MAX_LEN};
use carte_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `items` table. Owned by exactly one subcategory.
#[derive(Debug, Clone, FromRow)]
pub struct Item {
    pub id: DbId,
    pub subcategory_id: DbId,
    pub name: String,
    pub description: String,
    /// Whole currency units; no decimal handling.
    pub price: i32,
    /// Opaque reference into the external asset store.
    pub image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new item under `subcategory_id`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateItem {
    pub subcategory_id: DbId,
    #[validate(length(min = 1, max = ITEM_NAME_MAX_LEN))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: i32,
    #[serde(default)]
    pub image: Option<String>,
}
