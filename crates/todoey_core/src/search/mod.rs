//! Title search for items.
//!
//! # Responsibility
//! - Fold titles and queries into a case- and diacritic-insensitive form.
//! - Run category-scoped substring queries over the folded titles.

pub mod fold;
pub mod item_search;
