//! Category domain model.
//!
//! # Responsibility
//! - Define a named, colored grouping of to-do items.
//! - Hold the ordered list of owned item identifiers.
//!
//! # Invariants
//! - `name` is never blank; blank input becomes [`DEFAULT_CATEGORY_NAME`].
//! - `item_ids` is in append order and is maintained by storage, not callers.
//! - Names are not unique.

use crate::model::color::ColorTag;
use crate::model::item::ItemId;
use crate::model::validation::ValidationError;
use crate::model::{now_epoch_ms, text_or_default};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable category identifier.
pub type CategoryId = Uuid;

/// Name stored when the user leaves the name empty.
pub const DEFAULT_CATEGORY_NAME: &str = "Untitled category";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub color_tag: ColorTag,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Owned items, oldest first.
    pub item_ids: Vec<ItemId>,
}

impl Category {
    /// Creates a new, empty category with a generated ID.
    ///
    /// `name` is trimmed and defaulted; no other validation happens here.
    pub fn new(name: &str, color_tag: ColorTag) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: normalize_category_name(name),
            color_tag,
            created_at: now_epoch_ms(),
            item_ids: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::BlankCategoryName);
        }
        if self.created_at < 0 {
            return Err(ValidationError::NegativeTimestamp {
                field: "created_at",
                value: self.created_at,
            });
        }
        Ok(())
    }
}

/// Applies the category naming contract: trim, then default when empty.
pub fn normalize_category_name(raw: &str) -> String {
    text_or_default(raw, DEFAULT_CATEGORY_NAME)
}

#[cfg(test)]
mod tests {
    use super::{normalize_category_name, Category, DEFAULT_CATEGORY_NAME};
    use crate::model::color::ColorTag;
    use crate::model::validation::ValidationError;

    #[test]
    fn blank_names_fall_back_to_default() {
        assert_eq!(normalize_category_name(""), DEFAULT_CATEGORY_NAME);
        assert_eq!(normalize_category_name("   "), DEFAULT_CATEGORY_NAME);
        assert_eq!(normalize_category_name(" Work "), "Work");
    }

    #[test]
    fn new_category_starts_empty_and_valid() {
        let category = Category::new("Home", ColorTag::random());
        assert!(category.item_ids.is_empty());
        assert!(category.validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_name() {
        let mut category = Category::new("Home", ColorTag::random());
        category.name = " ".to_string();
        assert_eq!(category.validate(), Err(ValidationError::BlankCategoryName));
    }
}
