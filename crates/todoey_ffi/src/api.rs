//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Translate core results into plain response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - IDs cross the boundary as UUID strings.
//! - Storage failures surface as `ok=false` with a message; the UI decides
//!   whether to show them.

use log::warn;
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::OnceLock;
use todoey_core::db::open_db;
use todoey_core::view::category_list::EMPTY_PLACEHOLDER;
use todoey_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    resolve_db_path, Category, CategoryService, Item, ItemService, SqliteCategoryRepository,
    SqliteItemRepository,
};
use uuid::Uuid;

static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Category row for the category list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    pub category_id: String,
    pub name: String,
    /// `#RRGGBB` background color.
    pub color_tag: String,
    pub item_count: u32,
}

/// Item row for the item list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub item_id: String,
    pub title: String,
    pub done: bool,
    pub date_created_ms: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListResponse {
    pub ok: bool,
    pub items: Vec<CategoryRow>,
    /// Placeholder row text when there are no categories.
    pub placeholder: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemListResponse {
    pub ok: bool,
    pub items: Vec<ItemRow>,
    pub message: String,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    /// ID of the created or affected record.
    pub id: Option<String>,
    /// Done flag after a toggle.
    pub done: Option<bool>,
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, id: String) -> Self {
        Self {
            ok: true,
            id: Some(id),
            done: None,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            done: None,
            message: message.into(),
        }
    }
}

impl ItemListResponse {
    fn from_result(op: &str, result: Result<Vec<Item>, String>) -> Self {
        match result {
            Ok(items) => Self {
                ok: true,
                message: format!("{} item(s).", items.len()),
                items: items.into_iter().map(to_item_row).collect(),
            },
            Err(err) => Self {
                ok: false,
                items: Vec::new(),
                message: format!("{op} failed: {err}"),
            },
        }
    }
}

/// Lists all categories in insertion order.
#[flutter_rust_bridge::frb(sync)]
pub fn category_list() -> CategoryListResponse {
    let result = with_connection(|conn| {
        let repo = SqliteCategoryRepository::try_new(conn).map_err(|err| err.to_string())?;
        CategoryService::new(repo)
            .list_categories()
            .map_err(|err| err.to_string())
    });

    match result {
        Ok(categories) => CategoryListResponse {
            ok: true,
            placeholder: categories
                .is_empty()
                .then(|| EMPTY_PLACEHOLDER.to_string()),
            message: format!("{} categor(ies).", categories.len()),
            items: categories.into_iter().map(to_category_row).collect(),
        },
        Err(err) => CategoryListResponse {
            ok: false,
            items: Vec::new(),
            placeholder: None,
            message: format!("category_list failed: {err}"),
        },
    }
}

/// Creates a category with a random palette color.
///
/// Blank names are stored as "Untitled category".
#[flutter_rust_bridge::frb(sync)]
pub fn category_add(name: String) -> ActionResponse {
    let result = with_connection(|conn| {
        let repo = SqliteCategoryRepository::try_new(conn).map_err(|err| err.to_string())?;
        CategoryService::new(repo)
            .add_category(&name)
            .map_err(|err| err.to_string())
    });
    match result {
        Ok(category) => ActionResponse::success("Category created.", category.id.to_string()),
        Err(err) => failed("category_add", err),
    }
}

/// Deletes a category. Its items are left in storage.
#[flutter_rust_bridge::frb(sync)]
pub fn category_delete(category_id: String) -> ActionResponse {
    let result = parse_id(&category_id).and_then(|id| {
        with_connection(|conn| {
            let repo = SqliteCategoryRepository::try_new(conn).map_err(|err| err.to_string())?;
            CategoryService::new(repo)
                .delete_category(id)
                .map_err(|err| err.to_string())
        })
    });
    match result {
        Ok(()) => ActionResponse::success("Category deleted.", category_id),
        Err(err) => failed("category_delete", err),
    }
}

/// Lists one category's items sorted by title.
#[flutter_rust_bridge::frb(sync)]
pub fn item_list(category_id: String) -> ItemListResponse {
    let result = parse_id(&category_id)
        .and_then(|id| with_item_service(|service| service.load_items(id)));
    ItemListResponse::from_result("item_list", result)
}

/// Filters one category's items by title text, oldest first.
///
/// Blank `text` behaves like [`item_list`].
#[flutter_rust_bridge::frb(sync)]
pub fn item_search(category_id: String, text: String) -> ItemListResponse {
    let result = parse_id(&category_id)
        .and_then(|id| with_item_service(|service| service.search(id, &text)));
    ItemListResponse::from_result("item_search", result)
}

/// Appends a new item to a category.
#[flutter_rust_bridge::frb(sync)]
pub fn item_add(category_id: String, title: String) -> ActionResponse {
    let result = parse_id(&category_id)
        .and_then(|id| with_item_service(|service| service.add_item(id, &title)));
    match result {
        Ok(item) => ActionResponse::success("Item created.", item.id.to_string()),
        Err(err) => failed("item_add", err),
    }
}

/// Flips an item's done flag.
#[flutter_rust_bridge::frb(sync)]
pub fn item_toggle(item_id: String) -> ActionResponse {
    let result =
        parse_id(&item_id).and_then(|id| with_item_service(|service| service.toggle_done(id)));
    match result {
        Ok(item) => ActionResponse {
            done: Some(item.done),
            ..ActionResponse::success("Item updated.", item.id.to_string())
        },
        Err(err) => failed("item_toggle", err),
    }
}

/// Deletes an item by ID.
#[flutter_rust_bridge::frb(sync)]
pub fn item_delete(item_id: String) -> ActionResponse {
    let result =
        parse_id(&item_id).and_then(|id| with_item_service(|service| service.delete_item(id)));
    match result {
        Ok(()) => ActionResponse::success("Item deleted.", item_id),
        Err(err) => failed("item_delete", err),
    }
}

fn failed(op: &str, err: String) -> ActionResponse {
    warn!("event={op} module=ffi status=error error={err}");
    ActionResponse::failure(format!("{op} failed: {err}"))
}

fn resolve_path() -> PathBuf {
    DB_PATH.get_or_init(|| resolve_db_path(None)).clone()
}

fn parse_id(raw: &str) -> Result<Uuid, String> {
    Uuid::parse_str(raw.trim()).map_err(|_| format!("invalid id `{raw}`"))
}

fn with_connection<T>(f: impl FnOnce(&Connection) -> Result<T, String>) -> Result<T, String> {
    let conn = open_db(resolve_path()).map_err(|err| format!("DB open failed: {err}"))?;
    f(&conn)
}

fn with_item_service<T>(
    f: impl FnOnce(&ItemService<SqliteItemRepository<'_>>) -> todoey_core::RepoResult<T>,
) -> Result<T, String> {
    with_connection(|conn| {
        let repo = SqliteItemRepository::try_new(conn).map_err(|err| err.to_string())?;
        f(&ItemService::new(repo)).map_err(|err| err.to_string())
    })
}

fn to_category_row(category: Category) -> CategoryRow {
    CategoryRow {
        category_id: category.id.to_string(),
        item_count: u32::try_from(category.item_ids.len()).unwrap_or(u32::MAX),
        name: category.name,
        color_tag: category.color_tag.to_string(),
    }
}

fn to_item_row(item: Item) -> ItemRow {
    ItemRow {
        item_id: item.id.to_string(),
        title: item.title,
        done: item.done,
        date_created_ms: item.date_created,
    }
}
