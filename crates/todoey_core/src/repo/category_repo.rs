//! Category repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist categories and expose them in insertion order.
//! - Materialize each category's ordered item collection from
//!   `category_items`.
//!
//! # Invariants
//! - Deleting a category removes its `category_items` links only; item rows
//!   are left in place (orphaned).
//! - New categories are created without item links.

use crate::db::with_write_tx;
use crate::model::category::{Category, CategoryId};
use crate::model::color::ColorTag;
use crate::model::item::ItemId;
use crate::repo::{ensure_connection_ready, parse_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const CATEGORY_SELECT_SQL: &str = "SELECT
    uuid,
    name,
    color_tag,
    created_at
FROM categories";

/// Repository interface for category persistence.
pub trait CategoryRepository {
    /// Persists a new category in its own transaction.
    fn create_category(&self, category: &Category) -> RepoResult<CategoryId>;
    /// Gets one category with its item collection.
    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>>;
    /// Lists all categories in insertion order.
    fn list_categories(&self) -> RepoResult<Vec<Category>>;
    /// Deletes one category without touching its items.
    fn delete_category(&self, id: CategoryId) -> RepoResult<()>;
}

/// SQLite-backed category repository.
pub struct SqliteCategoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCategoryRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, &["categories", "category_items"])?;
        Ok(Self { conn })
    }
}

impl CategoryRepository for SqliteCategoryRepository<'_> {
    fn create_category(&self, category: &Category) -> RepoResult<CategoryId> {
        category.validate()?;
        if !category.item_ids.is_empty() {
            return Err(RepoError::InvalidData(
                "new categories cannot carry item links".to_string(),
            ));
        }

        with_write_tx(self.conn, "category_create", |tx| {
            tx.execute(
                "INSERT INTO categories (uuid, name, color_tag, created_at)
                 VALUES (?1, ?2, ?3, ?4);",
                params![
                    category.id.to_string(),
                    category.name.as_str(),
                    category.color_tag.as_str(),
                    category.created_at,
                ],
            )?;
            Ok(category.id)
        })
    }

    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CATEGORY_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_category_row(self.conn, row)?));
        }
        Ok(None)
    }

    fn list_categories(&self) -> RepoResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CATEGORY_SELECT_SQL} ORDER BY seq ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut categories = Vec::new();
        while let Some(row) = rows.next()? {
            categories.push(parse_category_row(self.conn, row)?);
        }
        Ok(categories)
    }

    fn delete_category(&self, id: CategoryId) -> RepoResult<()> {
        with_write_tx(self.conn, "category_delete", |tx| {
            let changed = tx.execute("DELETE FROM categories WHERE uuid = ?1;", [id.to_string()])?;
            if changed == 0 {
                return Err(RepoError::CategoryNotFound(id));
            }
            Ok(())
        })
    }
}

fn parse_category_row(conn: &Connection, row: &Row<'_>) -> RepoResult<Category> {
    let uuid_text: String = row.get("uuid")?;
    let id = parse_uuid(&uuid_text, "categories.uuid")?;

    let color_text: String = row.get("color_tag")?;
    let color_tag = ColorTag::parse(&color_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid color tag `{color_text}` in categories.color_tag"
        ))
    })?;

    let category = Category {
        id,
        name: row.get("name")?,
        color_tag,
        created_at: row.get("created_at")?,
        item_ids: load_item_ids(conn, &uuid_text)?,
    };
    category.validate()?;
    Ok(category)
}

fn load_item_ids(conn: &Connection, category_uuid: &str) -> RepoResult<Vec<ItemId>> {
    let mut stmt = conn.prepare(
        "SELECT item_uuid
         FROM category_items
         WHERE category_uuid = ?1
         ORDER BY position ASC;",
    )?;
    let mut rows = stmt.query([category_uuid])?;
    let mut ids = Vec::new();
    while let Some(row) = rows.next()? {
        let value: String = row.get(0)?;
        ids.push(parse_uuid(&value, "category_items.item_uuid")?);
    }
    Ok(ids)
}
