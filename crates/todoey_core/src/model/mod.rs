//! Domain model for categories and their to-do items.
//!
//! # Responsibility
//! - Define canonical records shared by storage, services and views.
//! - Own input normalization (defaults for blank names/titles).
//!
//! # Invariants
//! - Every record is identified by a stable UUID.
//! - Items reference their owner only through the category's `item_ids`.

pub mod category;
pub mod color;
pub mod item;
pub mod validation;

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time as unix epoch milliseconds.
///
/// Clocks set before 1970 collapse to `0` instead of failing.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
        })
}

/// Trims `raw` and substitutes `fallback` when nothing is left.
pub(crate) fn text_or_default(raw: &str, fallback: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
