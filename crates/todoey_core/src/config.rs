//! Runtime configuration shared by FFI and CLI entry points.
//!
//! # Responsibility
//! - Name the environment variables that configure storage and logging.
//! - Resolve the database file location with a stable precedence order.
//!
//! # Invariants
//! - Resolution never fails; the temp directory is the last fallback.

use std::path::{Path, PathBuf};

/// Environment variable overriding the database file path.
pub const DB_PATH_ENV: &str = "TODOEY_DB_PATH";
/// Environment variable naming the absolute log directory.
pub const LOG_DIR_ENV: &str = "TODOEY_LOG_DIR";
/// Environment variable naming the log level.
pub const LOG_LEVEL_ENV: &str = "TODOEY_LOG_LEVEL";
/// File name used when no explicit path is configured.
pub const DEFAULT_DB_FILE_NAME: &str = "todoey.sqlite3";

/// Resolves the database path.
///
/// Precedence: non-blank `explicit` path, then non-blank `TODOEY_DB_PATH`,
/// then `<temp_dir>/todoey.sqlite3`.
pub fn resolve_db_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit.filter(|path| !path.as_os_str().is_empty()) {
        return path.to_path_buf();
    }

    if let Ok(raw) = std::env::var(DB_PATH_ENV) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    std::env::temp_dir().join(DEFAULT_DB_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::resolve_db_path;
    use std::path::Path;

    #[test]
    fn explicit_path_wins() {
        let path = resolve_db_path(Some(Path::new("/var/data/todo.db")));
        assert_eq!(path, Path::new("/var/data/todo.db"));
    }

    #[test]
    fn empty_explicit_path_falls_through() {
        let path = resolve_db_path(Some(Path::new("")));
        assert!(!path.as_os_str().is_empty());
    }
}
