//! Core domain logic for Todoey.
//! Categories, items, storage and the list views built on top of them live
//! here; FFI and CLI crates only translate inputs and outputs.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod view;

pub use config::resolve_db_path;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{Category, CategoryId, DEFAULT_CATEGORY_NAME};
pub use model::color::ColorTag;
pub use model::item::{Item, ItemId, DEFAULT_ITEM_TITLE};
pub use model::validation::ValidationError;
pub use repo::category_repo::{CategoryRepository, SqliteCategoryRepository};
pub use repo::item_repo::{ItemRepository, SqliteItemRepository};
pub use repo::{RepoError, RepoResult};
pub use search::fold::fold_for_search;
pub use search::item_search::ItemSearchQuery;
pub use service::category_service::CategoryService;
pub use service::item_service::ItemService;
pub use view::category_list::CategoryListView;
pub use view::item_list::{ItemListMode, ItemListView};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
