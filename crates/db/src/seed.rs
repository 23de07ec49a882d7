//! Catalog seeding from a JSON document.
//!
//! Stands in for the administrative surface during development: the whole
//! document is inserted inside one transaction, parents before children, and
//! every entry is checked against the schema's field constraints first.
//!
//! ```json
//! {
//!   "categories": [
//!     {
//!       "name": "Drinks",
//!       "subcategories": [
//!         { "name": "Hot", "items": [ { "name": "Coffee", "price": 300 } ] }
//!       ]
//!     }
//!   ]
//! }
//! ```

use carte_core::catalog::validate_entry;
use carte_core::error::CoreError;
use serde::Deserialize;
use sqlx::PgPool;

use crate::models::category::CreateCategory;
use crate::models::item::CreateItem;
use crate::models::subcategory::CreateSubCategory;
use crate::repositories::{CategoryRepo, ItemRepo, SubCategoryRepo};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Invalid seed document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Top-level seed document.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedDocument {
    #[serde(default)]
    pub categories: Vec<SeedCategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedCategory {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub subcategories: Vec<SeedSubCategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedSubCategory {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub items: Vec<SeedItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: i32,
    #[serde(default)]
    pub image: Option<String>,
}

/// Row counts inserted by [`seed_catalog`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: usize,
    pub subcategories: usize,
    pub items: usize,
}

impl SeedDocument {
    /// Parse a seed document from JSON text.
    pub fn from_json(text: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Insert every entry of `document`, all or nothing.
///
/// Seeding is additive; a category whose name already exists fails the
/// whole run with a unique violation on `uq_categories_name`.
pub async fn seed_catalog(pool: &PgPool, document: &SeedDocument) -> Result<SeedSummary, SeedError> {
    let mut tx = pool.begin().await?;
    let mut summary = SeedSummary::default();

    for seed_category in &document.categories {
        let input = CreateCategory {
            name: seed_category.name.clone(),
            description: seed_category.description.clone(),
        };
        validate_entry("Category", &input)?;
        let category = CategoryRepo::create(&mut *tx, &input).await?;
        summary.categories += 1;

        for seed_subcategory in &seed_category.subcategories {
            let input = CreateSubCategory {
                category_id: category.id,
                name: seed_subcategory.name.clone(),
                description: seed_subcategory.description.clone(),
            };
            validate_entry("SubCategory", &input)?;
            let subcategory = SubCategoryRepo::create(&mut *tx, &input).await?;
            summary.subcategories += 1;

            for seed_item in &seed_subcategory.items {
                let input = CreateItem {
                    subcategory_id: subcategory.id,
                    name: seed_item.name.clone(),
                    description: seed_item.description.clone(),
                    price: seed_item.price,
                    image: seed_item.image.clone(),
                };
                validate_entry("Item", &input)?;
                ItemRepo::create(&mut *tx, &input).await?;
                summary.items += 1;
            }
        }
    }

    tx.commit().await?;

    tracing::info!(
        categories = summary.categories,
        subcategories = summary.subcategories,
        items = summary.items,
        "Catalog seeded"
    );

    Ok(summary)
}
