//! Key/value access in the shape of browser local storage: one text value
//! per key, whole-value replacement on write.

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::PmError;

pub fn get_item(conn: &Connection, key: &str) -> Result<Option<String>, PmError> {
    let value = conn
        .query_row(
            "SELECT value FROM local_storage WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()?;
    Ok(value)
}

pub fn set_item(conn: &Connection, key: &str, value: &str) -> Result<(), PmError> {
    conn.execute(
        "INSERT INTO local_storage (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
        params![key, value],
    )?;
    Ok(())
}

/// Returns whether a value was removed.
pub fn remove_item(conn: &Connection, key: &str) -> Result<bool, PmError> {
    let changed = conn.execute("DELETE FROM local_storage WHERE key = ?1", params![key])?;
    Ok(changed > 0)
}

/// SQLite's per-connection change counter. It moves only when another
/// connection commits to the database file.
pub fn data_version(conn: &Connection) -> Result<i64, PmError> {
    let version = conn.query_row("PRAGMA data_version", [], |row| row.get(0))?;
    Ok(version)
}
