//! Whole-catalog reads backing `GET /api/v1/catalog`.

use sqlx::PgPool;

use crate::catalog::CatalogSnapshot;
use crate::repositories::{CategoryRepo, ItemRepo, SubCategoryRepo};

/// Loads the three catalog tables together.
pub struct CatalogRepo;

impl CatalogRepo {
    /// Load every category, subcategory and item in primary-key order.
    ///
    /// The three reads share one read-only `REPEATABLE READ` transaction, so
    /// a concurrent admin write is either fully visible or not visible at all.
    pub async fn load_snapshot(pool: &PgPool) -> Result<CatalogSnapshot, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let categories = CategoryRepo::list(&mut *tx).await?;
        let subcategories = SubCategoryRepo::list(&mut *tx).await?;
        let items = ItemRepo::list(&mut *tx).await?;

        tx.commit().await?;

        tracing::debug!(
            categories = categories.len(),
            subcategories = subcategories.len(),
            items = items.len(),
            "Loaded catalog snapshot"
        );

        Ok(CatalogSnapshot {
            categories,
            subcategories,
            items,
        })
    }
}
