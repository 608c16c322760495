//! Item use-case service.
//!
//! # Invariants
//! - Blank titles are stored as `"Untitled item"`.
//! - Unfiltered listings sort by title; searches sort by creation time.
//! - Blank search text is the unfiltered listing.

use crate::model::category::CategoryId;
use crate::model::item::{Item, ItemId};
use crate::repo::item_repo::ItemRepository;
use crate::repo::RepoResult;
use crate::search::item_search::ItemSearchQuery;
use log::info;

/// Use-case service wrapper for item operations.
pub struct ItemService<R: ItemRepository> {
    repo: R,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Items of `category_id`, ascending by title.
    pub fn load_items(&self, category_id: CategoryId) -> RepoResult<Vec<Item>> {
        self.repo.list_items(category_id)
    }

    /// Creates an item stamped with the current time and appends it to the
    /// category's collection.
    pub fn add_item(&self, category_id: CategoryId, title: &str) -> RepoResult<Item> {
        let item = Item::new(title);
        self.repo.create_item(category_id, &item)?;
        info!(
            "event=item_add module=service status=ok category_id={category_id} item_id={}",
            item.id
        );
        Ok(item)
    }

    /// Flips the done flag; returns the item as stored afterwards.
    pub fn toggle_done(&self, id: ItemId) -> RepoResult<Item> {
        let item = self.repo.toggle_done(id)?;
        info!(
            "event=item_toggle module=service status=ok item_id={id} done={}",
            item.done
        );
        Ok(item)
    }

    pub fn delete_item(&self, id: ItemId) -> RepoResult<()> {
        self.repo.delete_item(id)?;
        info!("event=item_delete module=service status=ok item_id={id}");
        Ok(())
    }

    /// Raw lookup by ID; also finds orphaned items.
    pub fn get_item(&self, id: ItemId) -> RepoResult<Option<Item>> {
        self.repo.get_item(id)
    }

    /// Case- and diacritic-insensitive title search within one category,
    /// ascending by creation time. Blank `text` falls back to
    /// [`Self::load_items`].
    pub fn search(&self, category_id: CategoryId, text: &str) -> RepoResult<Vec<Item>> {
        self.repo
            .search_items(&ItemSearchQuery::new(category_id, text))
    }

    /// Items left behind by deleted categories.
    pub fn list_orphaned_items(&self) -> RepoResult<Vec<Item>> {
        self.repo.list_orphaned_items()
    }
}
