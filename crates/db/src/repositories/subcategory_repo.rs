//! Repository for the `subcategories` table.

use carte_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::subcategory::{CreateSubCategory, SubCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, category_id, name, description, created_at, updated_at";

/// Provides read and admin-side write operations for subcategories.
pub struct SubCategoryRepo;

impl SubCategoryRepo {
    /// Insert a new subcategory, returning the created row.
    ///
    /// Fails with a foreign key violation on `fk_subcategories_category_id`
    /// if the parent category does not exist.
    pub async fn create<'e, E>(
        executor: E,
        input: &CreateSubCategory,
    ) -> Result<SubCategory, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO subcategories (category_id, name, description)
             VALUES ($1, $2, COALESCE($3, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SubCategory>(&query)
            .bind(input.category_id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(executor)
            .await
    }

    /// Find a subcategory by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SubCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subcategories WHERE id = $1");
        sqlx::query_as::<_, SubCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all subcategories in primary-key order.
    pub async fn list<'e, E>(executor: E) -> Result<Vec<SubCategory>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM subcategories ORDER BY id ASC");
        sqlx::query_as::<_, SubCategory>(&query)
            .fetch_all(executor)
            .await
    }

    /// List the subcategories owned by one category, in primary-key order.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<SubCategory>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM subcategories WHERE category_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, SubCategory>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a subcategory and its items. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM subcategories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
