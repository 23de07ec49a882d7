pub mod catalog;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /catalog                                         full nested catalog (GET)
/// ```
///
/// The API is read-only; catalog rows are written through the admin CLI.
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/catalog", catalog::router())
}
