//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that take
//! the pool (or, for inserts, any Postgres executor) as the first argument.

pub mod catalog_repo;
pub mod category_repo;
pub mod item_repo;
pub mod subcategory_repo;

pub use catalog_repo::CatalogRepo;
pub use category_repo::CategoryRepo;
pub use item_repo::ItemRepo;
pub use subcategory_repo::SubCategoryRepo;
