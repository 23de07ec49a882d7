//! Handlers for the `/catalog` resource.

use axum::extract::State;
use axum::Json;
use carte_db::catalog::{self, CategoryDocument};
use carte_db::repositories::CatalogRepo;

use crate::error::AppResult;
use crate::response::ItemsResponse;
use crate::state::AppState;

/// GET /api/v1/catalog
///
/// Returns every category with its subcategories and their items nested
/// inside, wrapped as `{ "items": [...] }`.
pub async fn get_catalog(
    State(state): State<AppState>,
) -> AppResult<Json<ItemsResponse<Vec<CategoryDocument>>>> {
    let snapshot = CatalogRepo::load_snapshot(&state.pool).await?;
    let items = catalog::assemble(&snapshot, state.config.media_base_url.as_deref());

    tracing::debug!(categories = items.len(), "Catalog assembled");

    Ok(Json(ItemsResponse { items }))
}
