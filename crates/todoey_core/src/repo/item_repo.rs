//! Item repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist items and their link into one category's collection.
//! - Serve title-sorted listings, raw lookups and orphan queries.
//!
//! # Invariants
//! - Item creation inserts the row and appends the link in one transaction.
//! - Listing order is `title ASC` (binary collation), then insertion order.
//! - Items are addressed by ID only; display positions never reach storage.
//! - `title_fold` is always rewritten together with `title`.

use crate::db::with_write_tx;
use crate::model::category::CategoryId;
use crate::model::item::{Item, ItemId};
use crate::repo::{
    bool_to_int, category_exists, ensure_connection_ready, int_to_bool, parse_uuid, RepoError,
    RepoResult,
};
use crate::search::fold::fold_for_search;
use crate::search::item_search::{search_items, ItemSearchQuery};
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction};

pub(crate) const ITEM_COLUMNS: &str = "items.uuid AS uuid,
    items.title AS title,
    items.done AS done,
    items.date_created AS date_created";

/// Repository interface for item persistence.
pub trait ItemRepository {
    /// Inserts `item` and appends it to the category collection.
    fn create_item(&self, category_id: CategoryId, item: &Item) -> RepoResult<ItemId>;
    /// Gets one item by ID, whether or not a category still links it.
    fn get_item(&self, id: ItemId) -> RepoResult<Option<Item>>;
    /// Lists a category's items sorted by title.
    fn list_items(&self, category_id: CategoryId) -> RepoResult<Vec<Item>>;
    /// Substring search within one category, sorted by creation time.
    fn search_items(&self, query: &ItemSearchQuery) -> RepoResult<Vec<Item>>;
    /// Flips the done flag and returns the updated item.
    fn toggle_done(&self, id: ItemId) -> RepoResult<Item>;
    /// Deletes one item and its collection link.
    fn delete_item(&self, id: ItemId) -> RepoResult<()>;
    /// Lists items no category links to, oldest first.
    fn list_orphaned_items(&self) -> RepoResult<Vec<Item>>;
}

/// SQLite-backed item repository.
pub struct SqliteItemRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, &["items", "category_items", "categories"])?;
        Ok(Self { conn })
    }

    fn ensure_category(&self, category_id: CategoryId) -> RepoResult<()> {
        if category_exists(self.conn, category_id)? {
            Ok(())
        } else {
            Err(RepoError::CategoryNotFound(category_id))
        }
    }
}

impl ItemRepository for SqliteItemRepository<'_> {
    fn create_item(&self, category_id: CategoryId, item: &Item) -> RepoResult<ItemId> {
        item.validate()?;

        with_write_tx(self.conn, "item_create", |tx| {
            if !category_exists(tx, category_id)? {
                return Err(RepoError::CategoryNotFound(category_id));
            }

            tx.execute(
                "INSERT INTO items (uuid, title, title_fold, done, date_created)
                 VALUES (?1, ?2, ?3, ?4, ?5);",
                params![
                    item.id.to_string(),
                    item.title.as_str(),
                    fold_for_search(&item.title),
                    bool_to_int(item.done),
                    item.date_created,
                ],
            )?;
            tx.execute(
                "INSERT INTO category_items (category_uuid, item_uuid, position)
                 SELECT ?1, ?2, COALESCE(MAX(position) + 1, 0)
                 FROM category_items
                 WHERE category_uuid = ?1;",
                params![category_id.to_string(), item.id.to_string()],
            )?;
            Ok(item.id)
        })
    }

    fn get_item(&self, id: ItemId) -> RepoResult<Option<Item>> {
        get_item_on(self.conn, id)
    }

    fn list_items(&self, category_id: CategoryId) -> RepoResult<Vec<Item>> {
        self.ensure_category(category_id)?;

        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ITEM_COLUMNS}
             FROM items
             INNER JOIN category_items ci ON ci.item_uuid = items.uuid
             WHERE ci.category_uuid = ?1
             ORDER BY items.title ASC, items.seq ASC;"
        ))?;
        let rows = stmt.query([category_id.to_string()])?;
        collect_items(rows)
    }

    fn search_items(&self, query: &ItemSearchQuery) -> RepoResult<Vec<Item>> {
        let Some(needle) = query.needle() else {
            return self.list_items(query.category_id);
        };
        self.ensure_category(query.category_id)?;
        search_items(self.conn, query.category_id, &needle)
    }

    fn toggle_done(&self, id: ItemId) -> RepoResult<Item> {
        with_write_tx(self.conn, "item_toggle", |tx| {
            let changed = tx.execute(
                "UPDATE items SET done = 1 - done WHERE uuid = ?1;",
                [id.to_string()],
            )?;
            if changed == 0 {
                return Err(RepoError::ItemNotFound(id));
            }
            read_back(tx, id)
        })
    }

    fn delete_item(&self, id: ItemId) -> RepoResult<()> {
        with_write_tx(self.conn, "item_delete", |tx| {
            let changed = tx.execute("DELETE FROM items WHERE uuid = ?1;", [id.to_string()])?;
            if changed == 0 {
                return Err(RepoError::ItemNotFound(id));
            }
            Ok(())
        })
    }

    fn list_orphaned_items(&self) -> RepoResult<Vec<Item>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ITEM_COLUMNS}
             FROM items
             WHERE NOT EXISTS (
                SELECT 1 FROM category_items ci WHERE ci.item_uuid = items.uuid
             )
             ORDER BY items.date_created ASC, items.seq ASC;"
        ))?;
        let rows = stmt.query([])?;
        collect_items(rows)
    }
}

/// Decodes one row selected with [`ITEM_COLUMNS`].
pub(crate) fn parse_item_row(row: &Row<'_>) -> RepoResult<Item> {
    let uuid_text: String = row.get("uuid")?;
    let item = Item {
        id: parse_uuid(&uuid_text, "items.uuid")?,
        title: row.get("title")?,
        done: int_to_bool(row.get("done")?, "items.done")?,
        date_created: row.get("date_created")?,
    };
    item.validate()?;
    Ok(item)
}

fn collect_items(mut rows: rusqlite::Rows<'_>) -> RepoResult<Vec<Item>> {
    let mut items = Vec::new();
    while let Some(row) = rows.next()? {
        items.push(parse_item_row(row)?);
    }
    Ok(items)
}

fn get_item_on(conn: &Connection, id: ItemId) -> RepoResult<Option<Item>> {
    let mut stmt = conn.prepare(&format!("SELECT {ITEM_COLUMNS} FROM items WHERE uuid = ?1;"))?;
    let row = stmt
        .query_row([id.to_string()], |row| Ok(parse_item_row(row)))
        .optional()?;
    row.transpose()
}

fn read_back(tx: &Transaction<'_>, id: ItemId) -> RepoResult<Item> {
    get_item_on(tx, id)?.ok_or(RepoError::ItemNotFound(id))
}
