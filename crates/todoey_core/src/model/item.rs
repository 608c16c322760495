//! To-do item domain model.
//!
//! # Invariants
//! - `title` is never blank; blank input becomes [`DEFAULT_ITEM_TITLE`].
//! - `date_created` is fixed at creation and never rewritten.
//! - An item has no owner field; ownership lives in `Category::item_ids`.

use crate::model::validation::ValidationError;
use crate::model::{now_epoch_ms, text_or_default};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable item identifier.
pub type ItemId = Uuid;

/// Title stored when the user leaves the title empty.
pub const DEFAULT_ITEM_TITLE: &str = "Untitled item";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub done: bool,
    /// Unix epoch milliseconds.
    pub date_created: i64,
}

impl Item {
    /// Creates a not-done item stamped with the current time.
    pub fn new(title: &str) -> Self {
        Self::with_id(Uuid::new_v4(), title, now_epoch_ms())
    }

    /// Creates an item with caller-provided identity and creation time.
    pub fn with_id(id: ItemId, title: &str, date_created: i64) -> Self {
        Self {
            id,
            title: normalize_item_title(title),
            done: false,
            date_created,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::BlankItemTitle);
        }
        if self.date_created < 0 {
            return Err(ValidationError::NegativeTimestamp {
                field: "date_created",
                value: self.date_created,
            });
        }
        Ok(())
    }
}

/// Applies the item title contract: trim, then default when empty.
pub fn normalize_item_title(raw: &str) -> String {
    text_or_default(raw, DEFAULT_ITEM_TITLE)
}
