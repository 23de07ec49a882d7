//! Repository for the `items` table.

use carte_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::item::{CreateItem, Item};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, subcategory_id, name, description, price, image, created_at, updated_at";

/// Provides read and admin-side write operations for items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item, returning the created row.
    ///
    /// Fails with a foreign key violation on `fk_items_subcategory_id` if the
    /// parent subcategory does not exist.
    pub async fn create<'e, E>(executor: E, input: &CreateItem) -> Result<Item, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO items (subcategory_id, name, description, price, image)
             VALUES ($1, $2, COALESCE($3, ''), $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(input.subcategory_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.image)
            .fetch_one(executor)
            .await
    }

    /// Find an item by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all items in primary-key order.
    pub async fn list<'e, E>(executor: E) -> Result<Vec<Item>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM items ORDER BY id ASC");
        sqlx::query_as::<_, Item>(&query).fetch_all(executor).await
    }

    /// List the items owned by one subcategory, in primary-key order.
    pub async fn list_by_subcategory(
        pool: &PgPool,
        subcategory_id: DbId,
    ) -> Result<Vec<Item>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM items WHERE subcategory_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Item>(&query)
            .bind(subcategory_id)
            .fetch_all(pool)
            .await
    }

    /// Delete an item. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
