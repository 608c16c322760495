//! Category use-case service.
//!
//! # Invariants
//! - Blank names are stored as `"Untitled category"`.
//! - Every new category gets a palette color unless the caller supplies one.
//! - Deleting a category never deletes its items.

use crate::model::category::{Category, CategoryId};
use crate::model::color::ColorTag;
use crate::repo::category_repo::CategoryRepository;
use crate::repo::RepoResult;
use log::info;

/// Use-case service wrapper for category operations.
pub struct CategoryService<R: CategoryRepository> {
    repo: R,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists all categories in insertion order.
    pub fn list_categories(&self) -> RepoResult<Vec<Category>> {
        self.repo.list_categories()
    }

    pub fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        self.repo.get_category(id)
    }

    /// Creates a category with a random palette color.
    pub fn add_category(&self, name: &str) -> RepoResult<Category> {
        self.add_category_with_color(name, ColorTag::random())
    }

    /// Creates a category with a caller-chosen color.
    pub fn add_category_with_color(&self, name: &str, color_tag: ColorTag) -> RepoResult<Category> {
        let category = Category::new(name, color_tag);
        self.repo.create_category(&category)?;
        info!(
            "event=category_add module=service status=ok category_id={} color={}",
            category.id, category.color_tag
        );
        Ok(category)
    }

    /// Deletes a category by ID; its items stay in storage as orphans.
    pub fn delete_category(&self, id: CategoryId) -> RepoResult<()> {
        self.repo.delete_category(id)?;
        info!("event=category_delete module=service status=ok category_id={id}");
        Ok(())
    }
}
