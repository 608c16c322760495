//! Item list screen state for one category.
//!
//! The view is either unfiltered (title order) or filtered by search text
//! (creation order). Only empty search text means unfiltered; whitespace
//! is matched literally.

use crate::model::category::Category;
use crate::model::item::{Item, ItemId};
use crate::repo::item_repo::ItemRepository;
use crate::repo::RepoResult;
use crate::service::item_service::ItemService;
use crate::view::settle;

/// Which query the displayed items came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemListMode {
    Unfiltered,
    Filtered { text: String },
}

impl ItemListMode {
    fn from_text(text: &str) -> Self {
        if text.is_empty() {
            Self::Unfiltered
        } else {
            Self::Filtered {
                text: text.to_string(),
            }
        }
    }
}

pub struct ItemListView<R: ItemRepository> {
    service: ItemService<R>,
    category: Category,
    mode: ItemListMode,
    items: Vec<Item>,
}

impl<R: ItemRepository> ItemListView<R> {
    /// Opens `category` unfiltered and loads its items.
    pub fn open(service: ItemService<R>, category: Category) -> RepoResult<Self> {
        let mut view = Self {
            service,
            category,
            mode: ItemListMode::Unfiltered,
            items: Vec::new(),
        };
        view.reload()?;
        Ok(view)
    }

    /// Re-runs the query for the current mode.
    pub fn reload(&mut self) -> RepoResult<()> {
        self.items = match &self.mode {
            ItemListMode::Unfiltered => self.service.load_items(self.category.id)?,
            ItemListMode::Filtered { text } => self.service.search(self.category.id, text)?,
        };
        Ok(())
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn mode(&self) -> &ItemListMode {
        &self.mode
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Live search-box update. Empty text clears the filter.
    pub fn set_search_text(&mut self, text: &str) -> RepoResult<()> {
        self.mode = ItemListMode::from_text(text);
        self.reload()
    }

    /// Search-button submit; re-applies the current filter.
    pub fn submit_search(&mut self) -> RepoResult<()> {
        self.reload()
    }

    /// Cancel button: clears the text and returns to the unfiltered list.
    pub fn cancel_search(&mut self) -> RepoResult<()> {
        self.mode = ItemListMode::Unfiltered;
        self.reload()
    }

    pub fn add(&mut self, title: &str) -> RepoResult<Item> {
        let result = self.service.add_item(self.category.id, title);
        let reloaded = self.reload();
        settle("item_add", result, reloaded)
    }

    pub fn toggle(&mut self, id: ItemId) -> RepoResult<Item> {
        let result = self.service.toggle_done(id);
        let reloaded = self.reload();
        settle("item_toggle", result, reloaded)
    }

    pub fn delete(&mut self, id: ItemId) -> RepoResult<()> {
        let result = self.service.delete_item(id);
        let reloaded = self.reload();
        settle("item_delete", result, reloaded)
    }
}
