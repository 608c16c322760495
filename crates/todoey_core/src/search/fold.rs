//! Case and diacritic folding for substring search.
//!
//! Folding is applied once on write (stored in `items.title_fold`) and again
//! on every query, so both sides compare in the same form.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Folds `text` for comparison: canonical decomposition, combining marks
/// removed, lowercased.
pub fn fold_for_search(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
