//! List view state for UI front-ends.
//!
//! # Responsibility
//! - Hold the currently displayed categories/items.
//! - Reload after every action, addressing records by ID.
//!
//! # Invariants
//! - A view is reloaded after every mutation, successful or not.
//! - Mutation errors are logged here and still returned to the caller.

pub mod category_list;
pub mod item_list;

use crate::repo::RepoResult;
use log::error;

/// Combines a mutation result with the reload that follows it.
///
/// The mutation error takes precedence over a reload error.
fn settle<T>(event: &'static str, result: RepoResult<T>, reloaded: RepoResult<()>) -> RepoResult<T> {
    if let Err(err) = &result {
        error!("event={event} module=view status=error error={err}");
    }
    let value = result?;
    reloaded?;
    Ok(value)
}
