//! Catalog administration tasks behind the `carte-admin` binary.

use std::path::Path;

use anyhow::{Context, Result};

use carte_core::error::CoreError;
use carte_core::types::DbId;
use carte_db::repositories::CategoryRepo;
use carte_db::seed::{seed_catalog, SeedDocument, SeedSummary};
use carte_db::DbPool;

/// Read and parse a JSON seed document from disk.
pub fn load_seed_file(path: &Path) -> Result<SeedDocument> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    SeedDocument::from_json(&text)
        .with_context(|| format!("Failed to parse seed file {}", path.display()))
}

/// Load `path` and insert its contents in a single transaction.
pub async fn seed_from_file(pool: &DbPool, path: &Path) -> Result<SeedSummary> {
    let document = load_seed_file(path)?;
    let summary = seed_catalog(pool, &document)
        .await
        .context("Seeding aborted; no rows were written")?;
    tracing::info!(
        categories = summary.categories,
        subcategories = summary.subcategories,
        items = summary.items,
        file = %path.display(),
        "Seed file loaded"
    );
    Ok(summary)
}

/// Delete a category; its subcategories and items go with it.
///
/// A missing id yields [`CoreError::NotFound`] inside the returned error.
pub async fn delete_category(pool: &DbPool, id: DbId) -> Result<()> {
    let deleted = CategoryRepo::delete(pool, id)
        .await
        .context("Failed to delete category")?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Category",
            id,
        }
        .into());
    }
    tracing::info!(id, "Category deleted with its subcategories and items");
    Ok(())
}
