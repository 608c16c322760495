//! Category-scoped item search.
//!
//! # Invariants
//! - Only items linked to the queried category are returned.
//! - Matching is a literal substring test on folded text; `%` and `_` in the
//!   query carry no pattern meaning.
//! - Results are ordered by `date_created ASC`, then insertion order.

use crate::model::category::CategoryId;
use crate::model::item::Item;
use crate::repo::item_repo::{parse_item_row, ITEM_COLUMNS};
use crate::repo::RepoResult;
use crate::search::fold::fold_for_search;
use rusqlite::{params, Connection};

/// Search request for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSearchQuery {
    pub category_id: CategoryId,
    /// Raw user text; folded before matching.
    pub text: String,
}

impl ItemSearchQuery {
    pub fn new(category_id: CategoryId, text: impl Into<String>) -> Self {
        Self {
            category_id,
            text: text.into(),
        }
    }

    /// Returns the folded needle, or `None` when the text is empty.
    ///
    /// Whitespace is part of the needle; only `""` means "no filter".
    pub fn needle(&self) -> Option<String> {
        if self.text.is_empty() {
            None
        } else {
            Some(fold_for_search(&self.text))
        }
    }
}

/// Runs a substring search with an already folded `needle`.
///
/// Callers check category existence; an unknown category yields no rows.
pub(crate) fn search_items(
    conn: &Connection,
    category_id: CategoryId,
    needle: &str,
) -> RepoResult<Vec<Item>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ITEM_COLUMNS}
         FROM items
         INNER JOIN category_items ci ON ci.item_uuid = items.uuid
         WHERE ci.category_uuid = ?1
           AND instr(items.title_fold, ?2) > 0
         ORDER BY items.date_created ASC, items.seq ASC;"
    ))?;

    let mut rows = stmt.query(params![category_id.to_string(), needle])?;
    let mut items = Vec::new();
    while let Some(row) = rows.next()? {
        items.push(parse_item_row(row)?);
    }
    Ok(items)
}
