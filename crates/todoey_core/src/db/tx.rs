//! Scoped write transactions.
//!
//! Every user action (add, delete, toggle) maps to exactly one call of
//! [`with_write_tx`]. The transaction commits when the closure returns `Ok`
//! and is rolled back on drop otherwise.

use log::{debug, error};
use rusqlite::{Connection, Transaction};
use std::fmt::Display;
use std::time::Instant;

/// Runs `op` inside a transaction on `conn` and commits on success.
///
/// `event` names the user action in log records. Only metadata is logged,
/// never titles or names.
///
/// # Errors
/// - Returns the closure error unchanged; nothing is committed.
/// - Returns begin/commit failures converted into `E`.
pub fn with_write_tx<T, E>(
    conn: &Connection,
    event: &'static str,
    op: impl FnOnce(&Transaction<'_>) -> Result<T, E>,
) -> Result<T, E>
where
    E: From<rusqlite::Error> + Display,
{
    let started_at = Instant::now();
    let result = run_tx(conn, op);

    match &result {
        Ok(_) => debug!(
            "event={event} module=db status=ok duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event={event} module=db status=error duration_ms={} error_code=storage_write_failed error={err}",
            started_at.elapsed().as_millis()
        ),
    }

    result
}

fn run_tx<T, E>(
    conn: &Connection,
    op: impl FnOnce(&Transaction<'_>) -> Result<T, E>,
) -> Result<T, E>
where
    E: From<rusqlite::Error>,
{
    // Repositories share one `&Connection`, so the borrow-checked
    // `Connection::transaction` (which needs `&mut`) is not available here.
    let tx = conn.unchecked_transaction()?;
    let value = op(&tx)?;
    tx.commit()?;
    Ok(value)
}
