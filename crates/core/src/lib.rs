//! Domain types shared by the catalog database layer and the HTTP API.

pub mod catalog;
pub mod error;
pub mod media;
pub mod types;
