//! Storage layer for categories and items.
//!
//! One SQLite file holds the whole to-do state. This module owns everything
//! that touches the connection before a repository does: opening it with
//! foreign keys enforced, bringing the schema to the latest version, and the
//! transaction wrapper every add/toggle/delete goes through.
//!
//! # Invariants
//! - Schema version lives in `PRAGMA user_version`; a file written by a newer
//!   build is refused instead of being downgraded.
//! - Repositories only see connections returned by [`open_db`] or
//!   [`open_db_in_memory`].
//! - A failed user action leaves no partial rows (item without its category
//!   link, or the reverse).

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;
mod tx;

pub use open::{open_db, open_db_in_memory};
pub use tx::with_write_tx;

pub type DbResult<T> = Result<T, DbError>;

/// Failure opening, migrating or writing the to-do database.
#[derive(Debug)]
pub enum DbError {
    /// Any SQLite statement, begin or commit failure.
    Sqlite(rusqlite::Error),
    /// The file was migrated by a newer build.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "todoey database is at schema v{db_version}; this build supports up to v{latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
