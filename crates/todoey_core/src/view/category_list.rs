//! Category list screen state.

use crate::model::category::{Category, CategoryId};
use crate::repo::category_repo::CategoryRepository;
use crate::repo::RepoResult;
use crate::service::category_service::CategoryService;
use crate::view::settle;

/// Row text shown when no category exists yet.
pub const EMPTY_PLACEHOLDER: &str = "No categories added yet";

/// Categories as currently displayed, in insertion order.
pub struct CategoryListView<R: CategoryRepository> {
    service: CategoryService<R>,
    categories: Vec<Category>,
}

impl<R: CategoryRepository> CategoryListView<R> {
    /// Creates the view and performs the initial load.
    pub fn load(service: CategoryService<R>) -> RepoResult<Self> {
        let mut view = Self {
            service,
            categories: Vec::new(),
        };
        view.reload()?;
        Ok(view)
    }

    pub fn reload(&mut self) -> RepoResult<()> {
        self.categories = self.service.list_categories()?;
        Ok(())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Placeholder row text, present only while the list is empty.
    pub fn placeholder(&self) -> Option<&'static str> {
        self.categories.is_empty().then_some(EMPTY_PLACEHOLDER)
    }

    /// Returns the displayed category to open.
    pub fn select(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn add(&mut self, name: &str) -> RepoResult<Category> {
        let result = self.service.add_category(name);
        let reloaded = self.reload();
        settle("category_add", result, reloaded)
    }

    pub fn delete(&mut self, id: CategoryId) -> RepoResult<()> {
        let result = self.service.delete_category(id);
        let reloaded = self.reload();
        settle("category_delete", result, reloaded)
    }
}
