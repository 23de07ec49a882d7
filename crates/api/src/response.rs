//! Response envelope for the catalog endpoint.
//!
//! The catalog is returned under an `items` key:
//! `{ "items": [ ...categories ] }`.

use serde::Serialize;

/// `{ "items": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct ItemsResponse<T: Serialize> {
    pub items: T,
}
